use std::thread;
use std::time::Duration;

/// Re-runs `operation` while it fails with an error accepted by `retry_on`.
///
/// `count` is the number of additional attempts after the first one, so the
/// operation runs at most `count + 1` times. `delay` is slept between
/// attempts when non-zero. An error rejected by `retry_on` propagates
/// immediately; the last matching error propagates once all attempts are
/// exhausted.
pub fn retry<T, E, F, P>(count: u32, delay: Duration, mut operation: F, retry_on: P) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    P: Fn(&E) -> bool,
{
    let mut tried = 0;
    loop {
        match operation() {
            Ok(value) => return Ok(value),
            Err(err) => {
                if tried >= count || !retry_on(&err) {
                    return Err(err);
                }
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                tried += 1;
            }
        }
    }
}

use std::time::{Duration, Instant};

///
/// measure time of closure.
///
pub fn timer<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let ret = f();
    let duration = start.elapsed();
    (ret, duration)
}

//
// tests
//

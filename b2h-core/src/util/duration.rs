use std::time::Duration;

/// Human readable elapsed time: `N ms`, `N sec` or `N min [N sec]`.
pub fn format_duration(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();
    if ms < 1000 {
        return format!("{ms} ms");
    }
    let secs = elapsed.as_secs();
    let min = secs / 60;
    if min == 0 {
        return format!("{secs} sec");
    }
    match secs % 60 {
        0 => format!("{min} min"),
        rem => format!("{min} min {rem} sec"),
    }
}

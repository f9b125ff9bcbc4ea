use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// `330.0` -> `05:30`, `3725.0` -> `1:02:05`
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Width of a bar relative to the largest value in the chart, in percent.
pub fn bar_percent(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64 * 100.0).clamp(0.0, 100.0)
}

const MIN_WORD_SIZE: f64 = 0.8;
const MAX_WORD_SIZE: f64 = 3.0;

/// Font size in `rem` for a word cloud entry, scaled linearly between the
/// smallest and largest counts.
pub fn word_font_size(count: usize, min: usize, max: usize) -> f64 {
    if max <= min {
        return (MIN_WORD_SIZE + MAX_WORD_SIZE) / 2.0;
    }
    let ratio = (count.saturating_sub(min)) as f64 / (max - min) as f64;
    MIN_WORD_SIZE + ratio.min(1.0) * (MAX_WORD_SIZE - MIN_WORD_SIZE)
}

/// Hands `contents` to the browser as a file download via a data URL.
pub fn save_file(filename: &str, mime: &str, contents: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document available".to_string())?;
    let anchor = document
        .create_element("a")
        .map_err(|_| "Failed to create download link".to_string())?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Download link is not an anchor".to_string())?;

    anchor.set_href(&format!(
        "data:{mime};charset=utf-8,{}",
        urlencoding::encode(contents)
    ));
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}

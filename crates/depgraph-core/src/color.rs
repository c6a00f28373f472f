//! Recursive hue partitioning for visually grouped colors.
//!
//! The hue interval is subdivided across the distinct first segments of a
//! sorted name set, sized proportionally to group membership, with
//! damping-controlled gaps between groups. Each group recurses over its
//! sub-interval with the shared segment stripped, so names sharing a prefix
//! end up with adjacent hues.

use std::collections::BTreeMap;

use crate::name::ModuleName;

/// Fixed saturation for all node colors.
const SATURATION: f64 = 0.6;
/// Fixed value for all node colors.
const VALUE: f64 = 0.8;

/// Convert a hue in `[0, 1)` to an RGB hex string (no leading `#`).
pub fn rgb(hue: f64) -> String {
    let (red, green, blue) = hsv_to_rgb(hue, SATURATION, VALUE);
    format!(
        "{:02x}{:02x}{:02x}",
        channel_byte(red),
        channel_byte(green),
        channel_byte(blue)
    )
}

fn channel_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
    let sector = hue.rem_euclid(1.0) * 6.0;
    let index = sector.floor();
    let fractional = sector - index;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fractional);
    let t = value * (1.0 - saturation * (1.0 - fractional));
    match index as u32 % 6 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    }
}

/// Assign a color to every name so that "near" names get similar hues.
///
/// `damping` distributes discrimination power across levels: near 1 it
/// spreads colors uniformly regardless of depth, while values of 3 and
/// above strongly separate top-level groups at the cost of tighter hue
/// clustering inside each group.
pub fn assign_colors<'a>(
    names: impl IntoIterator<Item = &'a ModuleName>,
    start: f64,
    stop: f64,
    damping: f64,
) -> BTreeMap<ModuleName, String> {
    let mut sorted: Vec<String> = names.into_iter().map(|n| n.as_str().to_string()).collect();
    sorted.sort();
    sorted.dedup();

    spread(&sorted, start, stop, damping)
        .into_iter()
        .filter_map(|(raw, hue)| ModuleName::from_dotted(&raw).map(|n| (n, rgb(hue))))
        .collect()
}

/// Pure recursive hue partition over (names, interval, damping).
///
/// Intermediate keys may be empty strings (a fully stripped name); the
/// caller re-prepends the shared prefix at each level.
fn spread(names: &[String], start: f64, stop: f64, damping: f64) -> BTreeMap<String, f64> {
    let mut assigned = BTreeMap::new();
    match names {
        [] => return assigned,
        [only] => {
            assigned.insert(only.clone(), start);
            return assigned;
        }
        _ => {}
    }

    let split: Vec<Vec<&str>> = names.iter().map(|n| n.split('.').collect()).collect();
    let mut first_level: Vec<&str> = split.iter().map(|s| s[0]).collect();
    first_level.sort_unstable();
    first_level.dedup();

    // A shared first segment carries no information; strip it and recurse
    // over the full interval instead of wasting hue range on it.
    if let [head] = first_level.as_slice() {
        let rest: Vec<String> = split.iter().map(|s| s[1..].join(".")).collect();
        for (tail, hue) in spread(&rest, start, stop, damping) {
            assigned.insert(cat(head, &tail), hue);
        }
        return assigned;
    }

    let step = ((stop - start) / names.len() as f64) / damping;
    let gap = (damping - 1.0) * (stop - start) / first_level.len() as f64 / damping;
    let mut cursor = start;
    for word in first_level {
        let group: Vec<String> = split
            .iter()
            .filter(|s| s[0] == word)
            .map(|s| s[1..].join("."))
            .collect();
        let width = step * group.len() as f64;
        for (tail, hue) in spread(&group, cursor, cursor + width, damping) {
            assigned.insert(cat(word, &tail), hue);
        }
        cursor += width + gap;
    }
    assigned
}

/// Dotted concatenation handling an empty prefix or suffix.
fn cat(prefix: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        prefix.to_string()
    } else if prefix.is_empty() {
        suffix.to_string()
    } else {
        format!("{prefix}.{suffix}")
    }
}

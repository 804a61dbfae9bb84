// ABOUTME: Renders byte counts with binary-prefix units.
// ABOUTME: Bare integers below 1024, one decimal place above.

const UNIT: f64 = 1024.0;
const PREFIXES: [char; 6] = ['k', 'M', 'G', 'T', 'P', 'E'];

/// Format a byte count: `1023`, `1.0kB`, `1.5kB`, `12.3MB`.
pub fn pretty_size(bytes: u64) -> String {
    if bytes < 1024 {
        return bytes.to_string();
    }
    // floor(log1024(bytes)) without float rounding at exact powers
    let mut exp = 0;
    let mut rest = bytes;
    while rest >= 1024 && exp < PREFIXES.len() {
        rest /= 1024;
        exp += 1;
    }
    format!(
        "{:.1}{}B",
        bytes as f64 / UNIT.powi(exp as i32),
        PREFIXES[exp - 1]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_have_no_unit() {
        assert_eq!(pretty_size(0), "0");
        assert_eq!(pretty_size(1), "1");
        assert_eq!(pretty_size(1023), "1023");
    }

    #[test]
    fn kilobytes() {
        assert_eq!(pretty_size(1024), "1.0kB");
        assert_eq!(pretty_size(1536), "1.5kB");
    }

    #[test]
    fn exact_powers_pick_their_own_unit() {
        assert_eq!(pretty_size(1 << 20), "1.0MB");
        assert_eq!(pretty_size(1 << 30), "1.0GB");
        assert_eq!(pretty_size(1 << 40), "1.0TB");
        assert_eq!(pretty_size(1 << 50), "1.0PB");
        assert_eq!(pretty_size(1 << 60), "1.0EB");
    }

    #[test]
    fn typical_image_size() {
        assert_eq!(pretty_size(187_654_321), "179.0MB");
    }

    #[test]
    fn largest_value_stays_in_exabytes() {
        assert_eq!(pretty_size(u64::MAX), "16.0EB");
    }
}

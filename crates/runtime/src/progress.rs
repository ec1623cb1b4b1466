use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str = "{msg}: {percent:>3}%|{wide_bar}| {pos}/{len} [{elapsed_precise}<{eta_precise}, {per_sec}]";

/// Progress bar over `len` items, drawn on stderr unless `quiet`.
///
/// indicatif already suppresses drawing when stderr is not a terminal, so the
/// bar can be driven unconditionally by callers.
pub fn bar(len: usize, label: &'static str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::with_template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar());

    ProgressBar::new(len as u64)
        .with_style(style)
        .with_message(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_bar_is_hidden_and_still_counts() {
        let pb = bar(3, "Checking files", true);
        assert!(pb.is_hidden());

        let seen: Vec<_> = pb.wrap_iter(0..3).collect();
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(pb.position(), 3);
    }

    #[test]
    fn visible_bar_tracks_length_and_label() {
        let pb = bar(5, "Setting readonly", false);
        assert_eq!(pb.length(), Some(5));
        assert_eq!(pb.message(), "Setting readonly");
        pb.finish_and_clear();
    }
}

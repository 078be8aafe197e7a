use indicatif::{ProgressBar, ProgressStyle};

/// Creates a progress bar for a transfer, or a spinner when the total
/// size is not known up front.
///
/// # Arguments
/// * `size` - The number of bytes to transfer, if known.
/// * `name` - The name of the file being transferred.
///
/// # Returns
/// A `ProgressBar` instance.
pub fn transfer_bar(size: Option<u64>, name: &str) -> ProgressBar {
    match size {
        Some(size) if size > 0 => sized_bar(size, name),
        _ => byte_spinner(name),
    }
}

/// Creates a progress bar for a transfer with a known size.
fn sized_bar(size: u64, name: &str) -> ProgressBar {
    let pb = ProgressBar::new(size);

    pb.set_style(
        ProgressStyle::default_bar()
            .template(&(name.to_owned() + " {bar:40.cyan} {bytes}/{total_bytes} ({eta})"))
            .expect("Could not set progress bar style")
            .progress_chars("=>-"),
    );

    pb
}

/// Creates a spinner for a transfer with an unknown size.
fn byte_spinner(name: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template(&("{spinner:.cyan} ".to_owned() + name + " {bytes}"))
            .expect("Could not set spinner style")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠏"),
    );

    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_bar_with_known_size() {
        let pb = transfer_bar(Some(100), "rosters.csv");
        assert_eq!(pb.length(), Some(100));
    }

    #[test]
    fn test_transfer_bar_with_unknown_size() {
        let pb = transfer_bar(None, "rosters.csv");
        assert_eq!(pb.length(), None);
    }

    #[test]
    fn test_zero_size_falls_back_to_spinner() {
        let pb = transfer_bar(Some(0), "empty.csv");
        assert_eq!(pb.length(), None);
    }
}

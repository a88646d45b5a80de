//! Path utilities: expand ~ in user supplied paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("/tmp/a.csv"), PathBuf::from("/tmp/a.csv"));
        assert_eq!(expand_tilde("a.csv"), PathBuf::from("a.csv"));
    }

    #[test]
    fn tilde_goes_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/p.csv"), home.join("p.csv"));
        }
    }
}

const ROOT_PREFIX: &str = "MONOTONE";

pub(crate) mod svg {
    use std::{env, path};

    use crate::debug;

    const GROUP_PREFIX: &str = "SVG";

    fn key(name: &str) -> String {
        format!("{}_{}_{}", super::ROOT_PREFIX, GROUP_PREFIX, name)
    }

    /// Directory receiving the snapshots. Output is disabled when unset.
    pub(crate) fn output_path() -> Option<path::PathBuf> {
        env::var_os(key("OUTPUT_PATH")).map(path::PathBuf::from)
    }

    pub(crate) fn show_labels() -> bool {
        // Note the show/hide inversion
        env::var_os(key("HIDE_LABELS")).is_none()
    }

    pub(crate) fn output_level() -> debug::svg::SvgOutputLevel {
        use debug::svg::SvgOutputLevel;

        match env::var(key("OUTPUT_LEVEL")) {
            Ok(value) => {
                match value.trim() {
                    "0" => SvgOutputLevel::None,
                    "2" => SvgOutputLevel::AllSteps,
                    _ => SvgOutputLevel::ResultOnly,
                }
            }
            Err(_) => SvgOutputLevel::ResultOnly,
        }
    }
}

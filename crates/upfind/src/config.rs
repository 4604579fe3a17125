use upfind_core::SearchConfig;

use crate::Cli;

/// Turn parsed arguments into the immutable search description.
/// Returns `None` when no target name was given.
pub fn search_config(cli: &Cli) -> Option<SearchConfig> {
    let target = cli.target.as_ref()?;
    let mut config = SearchConfig::new(target).start_directory(&cli.start_directory);
    if let Some(marker) = &cli.flag_file {
        config = config.stop_marker(marker);
    }
    if let Some(stop) = &cli.stop_directory {
        config = config.stop_directory(stop);
    }
    Some(config)
}

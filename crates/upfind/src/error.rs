// Errors reach the top level as anyhow::Error; this renders them for stderr.

use std::io::Write;

pub fn format_error(err: &anyhow::Error) -> String {
    let mut msg = err.to_string();
    for cause in err.chain().skip(1) {
        msg.push_str(&format!("\n  caused by: {cause}"));
    }
    msg
}

/// Write an `ERROR:` diagnostic unless the user asked for silence.
/// A failing stderr has nowhere left to report to, so it is ignored.
pub fn report(err: &mut impl Write, quiet: bool, msg: &str) {
    if !quiet {
        let _ = writeln!(err, "ERROR: {msg}");
    }
}

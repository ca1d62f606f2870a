use dotenv::dotenv;
use oembed_field::{
    Error, OEmbedField,
    config::{Config, global_config},
    telemetry::setup_logger,
};
use std::{
    env,
    io::{self, Write},
    process::ExitCode,
};
use tracing::{info, warn};

fn main() -> color_eyre::Result<ExitCode> {
    dotenv().ok();
    color_eyre::install()?;
    let _guard = setup_logger()?;

    Config::from_env().init()?;
    let config = global_config();

    let field = OEmbedField::from_config(&config);
    let rules = field.ensure_resolved()?;
    info!(
        rules = rules.len(),
        rules_path = ?config.rules_path,
        max_length = field.max_length(),
        "checking urls"
    );

    let args = env::args().skip(1).collect::<Vec<_>>();
    let urls = if args.is_empty() {
        io::stdin().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        args
    };

    let failed = check_urls(
        &field,
        urls.iter().map(String::as_str),
        &mut io::stdout().lock(),
    )?;

    if failed > 0 {
        warn!(failed, "some urls were rejected");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Clean each non-blank url, writing `ok <url>` or `error <url>: <message>`.
/// Returns how many urls were rejected; any other failure aborts the run.
fn check_urls<'a, W: Write>(
    field: &OEmbedField,
    urls: impl IntoIterator<Item = &'a str>,
    out: &mut W,
) -> color_eyre::Result<usize> {
    let mut failed = 0usize;
    for url in urls.into_iter().map(str::trim).filter(|u| !u.is_empty()) {
        match field.clean(url) {
            Ok(cleaned) => writeln!(out, "ok {cleaned}")?,
            Err(err @ Error::Validation(_)) => {
                failed += 1;
                writeln!(out, "error {url}: {err}")?;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(field: &OEmbedField, urls: &[&str]) -> (usize, String) {
        let mut out = Vec::new();
        let failed = check_urls(field, urls.iter().copied(), &mut out).unwrap();
        (failed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reports_each_url() {
        let (failed, out) = run(
            &OEmbedField::new(),
            &[
                " http://vimeo.com/12345 ",
                "",
                "http://example.com/video",
                "vimeo.com/1",
            ],
        );
        assert_eq!(failed, 2);
        assert_eq!(
            out,
            "ok http://vimeo.com/12345\n\
             error http://example.com/video: Not a valid oEmbed link\n\
             error vimeo.com/1: Enter a valid URL.\n"
        );
    }

    #[test]
    fn all_accepted_means_no_failures() {
        let (failed, out) = run(&OEmbedField::new(), &["http://qik.com/v/1"]);
        assert_eq!(failed, 0);
        assert_eq!(out, "ok http://qik.com/v/1\n");
    }

    #[test]
    fn broken_rules_abort_the_run() {
        let field = OEmbedField::from_rules(["(unclosed"]);
        let mut out = Vec::new();
        assert!(check_urls(&field, ["http://vimeo.com/1"], &mut out).is_err());
        assert!(out.is_empty());
    }
}

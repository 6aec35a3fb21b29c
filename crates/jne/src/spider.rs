use crate::cli::{CandidatosCli, CommonArgs, SimbolosCli};
use jne_spider::{self as spider, Settings};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, trace};

/// Collect every candidate's Hoja de Vida into XLSX & CSV files.
pub async fn candidates(cli: CandidatosCli, tui: bool) -> anyhow::Result<()> {
    let settings = settings(&cli.common, set_output_dir)?;
    let http_client = spider::build_client(&settings)?;

    let time = std::time::Instant::now();
    let report = spider::candidates::scrape(
        &http_client,
        &settings,
        spider::candidates::CANDIDATES,
        tui,
    )
    .await?;

    info!(
        "candidate data collected to {:?}, time elapsed: {:?}",
        report.xlsx_path(),
        time.elapsed()
    );

    Ok(())
}

/// Download every party symbol, or probe a range of symbol IDs with `--scan`.
pub async fn symbols(cli: SimbolosCli, tui: bool) -> anyhow::Result<()> {
    let settings = settings(&cli.common, set_icon_dir)?;
    let http_client = spider::build_client(&settings)?;

    let time = std::time::Instant::now();
    if cli.scan {
        let found = spider::symbols::scan(
            &http_client,
            &settings,
            cli.from..=cli.to,
            &settings.icon_dir,
            tui,
        )
        .await?;
        info!(
            "symbol scan finished, {} found, time elapsed: {:?}",
            found.len(),
            time.elapsed()
        );
    } else {
        let report = spider::symbols::scrape(
            &http_client,
            &settings,
            spider::symbols::PARTY_SYMBOLS,
            tui,
        )
        .await?;
        info!(
            "symbols collected to {:?}, time elapsed: {:?}",
            report.dir,
            time.elapsed()
        );
    }

    Ok(())
}

// environment settings, overridden by the command line
fn settings(
    common: &CommonArgs,
    set_out: impl FnOnce(&mut Settings, PathBuf),
) -> anyhow::Result<Settings> {
    let settings = overridden(Settings::from_env()?, common, set_out);
    trace!("settings: {settings:?}");
    debug!(
        "candidate endpoint {}, symbol endpoint {}",
        settings.candidate_url, settings.symbol_url
    );
    Ok(settings)
}

fn overridden(
    mut settings: Settings,
    common: &CommonArgs,
    set_out: impl FnOnce(&mut Settings, PathBuf),
) -> Settings {
    if let Some(out) = &common.out {
        set_out(&mut settings, out.clone());
    }
    if let Some(ms) = common.delay_ms {
        settings.delay = Duration::from_millis(ms);
    }
    settings
}

fn set_output_dir(settings: &mut Settings, out: PathBuf) {
    settings.output_dir = out;
}

fn set_icon_dir(settings: &mut Settings, out: PathBuf) {
    settings.icon_dir = out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn env() -> Settings {
        Settings::from_lookup(|key| match key {
            "JNE_OUTPUT_DIR" => Some("env_out".to_string()),
            "JNE_ICON_DIR" => Some("env_icons".to_string()),
            "JNE_DELAY_MS" => Some("1500".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn flags_win_over_environment() {
        let cli =
            CandidatosCli::try_parse_from(["candidatos", "--out", "cli_out", "--delay-ms", "0"])
                .unwrap();
        let settings = overridden(env(), &cli.common, set_output_dir);

        assert_eq!(settings.output_dir, PathBuf::from("cli_out"));
        assert_eq!(settings.delay, Duration::ZERO);
        assert_eq!(settings.icon_dir, PathBuf::from("env_icons"));
    }

    #[test]
    fn environment_kept_without_flags() {
        let cli = CandidatosCli::try_parse_from(["candidatos"]).unwrap();
        let settings = overridden(env(), &cli.common, set_output_dir);

        assert_eq!(settings.output_dir, PathBuf::from("env_out"));
        assert_eq!(settings.delay, Duration::from_millis(1500));
    }

    #[test]
    fn simbolos_out_sets_icon_dir() {
        let cli = SimbolosCli::try_parse_from(["simbolos", "-o", "cli_icons"]).unwrap();
        let settings = overridden(env(), &cli.common, set_icon_dir);

        assert_eq!(settings.icon_dir, PathBuf::from("cli_icons"));
        assert_eq!(settings.output_dir, PathBuf::from("env_out"));
        assert_eq!(settings.delay, Duration::from_millis(1500));
    }
}

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bars for one sequential spider run: a total bar, plus success & failure counters.
///
/// Every bar is hidden when `tui` is off, so callers report through it unconditionally.
pub(crate) struct Progress {
    _multi: Option<MultiProgress>,
    total: ProgressBar,
    success: ProgressBar,
    fails: ProgressBar,
}

impl Progress {
    pub(crate) fn new(len: usize, tui: bool) -> anyhow::Result<Self> {
        if !tui {
            return Ok(Self {
                _multi: None,
                total: ProgressBar::hidden(),
                success: ProgressBar::hidden(),
                fails: ProgressBar::hidden(),
            });
        }

        // overall multi progress bar
        let multi = MultiProgress::new();

        // total number of entries to collect
        let total = multi.add(
            ProgressBar::new(len as u64).with_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.magenta} {wide_msg}\n \
                        {prefix:>9.white} |{bar:57.white/grey}| {pos:<2} / {human_len} \
                        [Time: {elapsed}, ETA: {eta}]",
                    )?
                    .progress_chars("## "),
            ),
        );
        total.set_prefix("total");
        total.enable_steady_tick(Duration::from_millis(100));

        // total successful collections
        let success = multi.insert_after(
            &total,
            ProgressBar::new(len as u64).with_style(
                ProgressStyle::default_bar()
                    .template(" {msg:>9.green} |{bar:57.green}| {pos:<2.green}")?
                    .progress_chars("## "),
            ),
        );
        success.set_message("successes");

        // total failed collections
        let fails = multi.insert_after(
            &success,
            ProgressBar::new(len as u64).with_style(
                ProgressStyle::default_bar()
                    .template(" {msg:>9.red} |{bar:57.red}| {pos:<2.red}")?
                    .progress_chars("## "),
            ),
        );
        fails.set_message("failures");

        Ok(Self {
            _multi: Some(multi),
            total,
            success,
            fails,
        })
    }

    /// Show what is currently being fetched.
    pub(crate) fn working(&self, msg: String) {
        self.total.set_message(msg);
    }

    pub(crate) fn succeed(&self, msg: String) {
        self.total.println(format!("  {} {msg}", "✓".green()));
        self.success.inc(1);
        self.total.inc(1);
    }

    pub(crate) fn fail(&self, msg: String) {
        self.total.println(format!("  {} {msg}", "✗".red()));
        self.fails.inc(1);
        self.total.inc(1);
    }

    /// Count an entry that was skipped without a request.
    pub(crate) fn skip(&self, msg: String) {
        self.total.println(format!("  {} {msg}", "⚠".yellow()));
        self.total.inc(1);
    }

    pub(crate) fn finish(&self) {
        self.total.finish_and_clear();
        self.success.finish_and_clear();
        self.fails.finish_and_clear();
    }
}

/// Banner printed before a spider run, in console mode.
pub(crate) fn banner(name: &str) -> String {
    format!("{bar}\n{name:^70}\n{bar}", bar = "=".repeat(70))
}

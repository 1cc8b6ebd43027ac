use log::{debug, error, info};
use relay_core::client::ReqwestFetcher;
use relay_core::errors::RelayError;
use relay_core::runner::run;
use relay_core::settings::{ConfigSource, Settings};
use relay_core::utils::setup_logger;
use std::io::{self, Write};

// 配置阶段出错：日志还没按配置初始化，用默认级别
fn report_setup_error<W: Write>(out: &mut W, err: &RelayError) {
    let _ = setup_logger(None);
    error!("{}", err);
    let _ = writeln!(out, "Error: {}", err);
}

#[tokio::main]
async fn main() {
    let mut stdout = io::stdout().lock();

    let source = match ConfigSource::locate() {
        Ok(source) => source,
        Err(err) => {
            report_setup_error(&mut stdout, &err);
            return;
        }
    };
    let settings = match Settings::load(&source) {
        Ok(settings) => settings,
        Err(err) => {
            report_setup_error(&mut stdout, &err);
            return;
        }
    };
    if let Err(err) = setup_logger(settings.level_filter()) {
        eprintln!("logger error: {}", err);
    }
    debug!("relay-probe configuration path:{} (required: {})", source.path, source.required);

    let request = settings.request();
    let fetcher = match ReqwestFetcher::new(&settings.proxy) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            error!("{}", err);
            let _ = writeln!(stdout, "Requesting {}...", request);
            let _ = writeln!(stdout, "Error: {}", err);
            return;
        }
    };

    match run(&fetcher, &request, &mut stdout).await {
        Ok(outcome) => info!("finished: {:?}", outcome),
        Err(err) => eprintln!("can't write report: {}", err),
    }
}

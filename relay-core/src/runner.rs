use crate::client::ProxyFetch;
use crate::models::{ProxyRequest, RunOutcome};
use log::{error, info};
use std::io::{self, Write};

/** 发一次请求，把结果写到 `out`。
* 请求失败不向上抛，只打印一行 `Error: ...`；返回的 `io::Result` 只反映写 `out` 是否成功
*/
pub async fn run<F, W>(fetcher: &F, request: &ProxyRequest, out: &mut W) -> io::Result<RunOutcome>
where
    F: ProxyFetch + ?Sized,
    W: Write,
{
    writeln!(out, "Requesting {}...", request)?;

    let outcome = match fetcher.fetch(request).await {
        Ok(response) => {
            info!("proxy answered {}", response.status);
            writeln!(out, "Status Code: {}", response.status)?;
            writeln!(out, "Response Headers: {:?}", response.headers)?;
            writeln!(out, "Response Body: {}", response.body)?;
            RunOutcome::Completed(response.status)
        }
        Err(err) => {
            error!("request to {} failed: {}", request.endpoint, err);
            writeln!(out, "Error: {}", err)?;
            RunOutcome::Failed(err.to_string())
        }
    };
    out.flush()?;
    Ok(outcome)
}

use rusty_golf_ledger::args;
use rusty_golf_ledger::controller::strokes_gained::{GolfityClient, StrokesGainedLookup};
use rusty_golf_ledger::run;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::args_checks();
    let client = args
        .lookup_url
        .as_deref()
        .map(|url| GolfityClient::new(url, args.lookup_wait));

    let summary = run(
        &args,
        client.as_ref().map(|c| c as &dyn StrokesGainedLookup),
    )
    .await?;

    println!("Data saved to {}", summary.ledger_file.display());
    if let Some(gaps_file) = &summary.gaps_file {
        println!("Gaps needing manual entry saved to {}", gaps_file.display());
    }
    Ok(())
}

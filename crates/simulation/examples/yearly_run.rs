//! Run every built-in scenario and print the headline results.

use tokensim::{cumulative_usd_series, run, summarize, Preset};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    for preset in Preset::ALL {
        let params = preset.parameters();
        let series = run(&params)?;
        let summary = summarize(&series, &params);
        let usd = cumulative_usd_series(&series);

        println!("{} scenario", preset.name());
        println!(
            "  price  ${:.4} -> ${:.4} ({:+.1}%)",
            params.initial_price, summary.final_price, summary.price_change_percent
        );
        println!(
            "  tvl    ${:.1}M -> ${:.1}M ({:+.1}%, {:.0}% of target)",
            params.initial_tvl_millions,
            summary.final_tvl_millions,
            summary.tvl_change_percent,
            summary.tvl_target_progress_percent
        );
        println!(
            "  year   {:.0} units bought back (${:.0} at daily prices)",
            summary.total_buyback,
            usd.last().map(|u| u.buyback_usd).unwrap_or(0.0)
        );

        let day0 = series.first();
        println!(
            "  day 0  emission {:.1}, buyback {:.1}, locked {:.1}\n",
            day0.daily_emission_to_market, day0.daily_buyback, day0.daily_locked
        );
    }

    Ok(())
}

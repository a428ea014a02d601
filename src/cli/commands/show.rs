use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::manager::ConventionsManager;
use crate::errors::{AppError, AppResult};
use crate::models::convention::Convention;
use crate::utils::date;
use crate::utils::formatting::{bold, display_date_range};
use chrono::NaiveDate;

const WRAP_WIDTH: usize = 72;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Show { tab } = cmd {
        let mut mgr = ConventionsManager::with_today(today);
        mgr.load_from_path(&cfg.feed);

        match tab.as_str() {
            "current" => render_current_tab(&mgr, cfg),
            "next" => render_next_tab(&mgr, cfg),
            "past" => render_past_tab(&mgr, cfg),
            other => return Err(AppError::InvalidTab(other.to_string())),
        }
    }

    Ok(())
}

fn render_current_tab(mgr: &ConventionsManager, cfg: &Config) {
    let conventions = mgr.conventions_for_current_tab();

    let Some(convention) = conventions.first() else {
        println!("{}", bold("No Current Conventions"));
        println!("There are no conventions happening right now.");
        return;
    };

    // Live event, or a preview of the next one with a badge
    let is_current = mgr.is_displayed_as_current(convention);

    render_header(convention, cfg);
    if !is_current {
        println!("[Upcoming Convention]");
    }
    println!();

    render_details(convention);

    if !convention.artist_alley_hours.is_empty() {
        println!("{}", bold("Artist Alley Hours"));
        for line in &convention.artist_alley_hours {
            println!("  {}", line);
        }
        println!();
    }

    if is_current && !convention.stamp_rallies.is_empty() {
        println!(
            "{} ({} Active)",
            bold("Stamp Rallies"),
            convention.stamp_rallies.len()
        );
        for rally in &convention.stamp_rallies {
            println!("  {}", bold(&rally.title));
            println!("  Participating Booths: {}", rally.participating_booths);
            for line in textwrap::wrap(&rally.description, WRAP_WIDTH - 2) {
                println!("  {}", line);
            }
            println!("  Prize: {}", rally.prize);
            println!();
        }
    }

    if is_current && !convention.catalogue_images.is_empty() {
        println!("{}", bold("Convention Catalogue"));
        for image in &convention.catalogue_images {
            match &image.caption {
                Some(caption) => println!("  {} - {}", image.alt, caption),
                None => println!("  {}", image.alt),
            }
        }
        println!();
    }
}

fn render_next_tab(mgr: &ConventionsManager, cfg: &Config) {
    let conventions = mgr.conventions_for_next_tab();

    if conventions.is_empty() {
        println!("{}", bold("No Upcoming Conventions"));
        println!("There are no upcoming conventions scheduled at this time.");
        return;
    }

    for convention in &conventions {
        render_header(convention, cfg);
        println!();
        render_details(convention);
    }
}

fn render_past_tab(mgr: &ConventionsManager, cfg: &Config) {
    let mut conventions = mgr.conventions_by_category("past");

    if conventions.is_empty() {
        println!("{}", bold("No Past Conventions"));
        println!("There are no past conventions to display.");
        return;
    }

    if cfg.past_limit > 0 && conventions.len() > cfg.past_limit {
        conventions = &conventions[..cfg.past_limit];
    }

    for convention in conventions {
        println!("{}", bold(&convention.name));
        println!("{}", convention.location);
        println!(
            "{}",
            display_date_range(&convention.dates.start, &convention.dates.end)
        );
        if let Some(recap) = &convention.event_recap {
            println!("{}", textwrap::fill(recap, WRAP_WIDTH));
        }
        println!();
    }
}

fn render_header(convention: &Convention, cfg: &Config) {
    println!("{}", bold(&convention.name));
    println!("{}", convention.location);
    println!(
        "{}",
        display_date_range(&convention.dates.start, &convention.dates.end)
    );
    if cfg.show_weekday {
        if let Some(weekday) = date::weekday_name(&convention.dates.start) {
            println!("Starts on {}", weekday);
        }
    }
}

fn render_details(convention: &Convention) {
    if let Some(description) = &convention.description {
        println!("{}", textwrap::fill(description, WRAP_WIDTH));
    }
    if let Some(booth) = &convention.booth {
        println!("Booth: {}", booth);
    }
    if let Some(venue) = &convention.venue {
        println!("{}", venue);
    }
    if let Some(address) = &convention.address {
        println!("{}", address);
    }
    if let Some(area) = &convention.area {
        println!("{}", area);
    }
    println!();
}

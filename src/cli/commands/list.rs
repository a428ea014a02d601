use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::manager::ConventionsManager;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::utils::colors;
use crate::utils::formatting::display_date_range;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::List { category } = cmd {
        let mut mgr = ConventionsManager::with_today(today);
        mgr.load_from_path(&cfg.feed);

        let buckets: Vec<Category> = if category == "all" {
            Category::all().to_vec()
        } else {
            match Category::cat_from_str(category) {
                Some(cat) => vec![cat],
                None => return Err(AppError::InvalidCategory(category.clone())),
            }
        };

        let mut table = Table::new(vec![
            Column {
                header: "ID".to_string(),
                width: 14,
            },
            Column {
                header: "NAME".to_string(),
                width: 28,
            },
            Column {
                header: "LOCATION".to_string(),
                width: 22,
            },
            Column {
                header: "DATES".to_string(),
                width: 32,
            },
            Column {
                header: "CATEGORY".to_string(),
                width: 8,
            },
        ]);

        let mut shown = 0usize;
        for cat in buckets {
            let mut listed = mgr.bucket(cat);
            // keep the past listing short when the config caps it
            if cat == Category::Past && cfg.past_limit > 0 && listed.len() > cfg.past_limit {
                listed = &listed[..cfg.past_limit];
            }

            for convention in listed {
                // category last so the color codes don't skew the padding
                table.add_row(vec![
                    convention.id.clone(),
                    convention.name.clone(),
                    convention.location.clone(),
                    display_date_range(&convention.dates.start, &convention.dates.end),
                    format!(
                        "{}{}{}",
                        colors::color_for_category(cat),
                        cat,
                        colors::RESET
                    ),
                ]);
                shown += 1;
            }
        }

        if shown == 0 {
            println!("No conventions to list.");
        } else {
            print!("{}", table.render());
        }
    }

    Ok(())
}

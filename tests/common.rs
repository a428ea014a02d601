#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ctb() -> Command {
    cargo_bin_cmd!("convtab")
}

/// Write a feed document to a unique file in the system temp dir
pub fn write_feed(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_convtab.json", name));
    fs::write(&path, json).unwrap();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_convtab_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A small feed spanning all three buckets relative to 2025-06-03
pub fn sample_feed() -> &'static str {
    r#"{
  "conventions": [
    {
      "id": "anime-north-2025",
      "name": "Anime North 2025",
      "location": "Toronto, ON",
      "dates": { "start": "2025-06-01", "end": "2025-06-05" },
      "venue": "Toronto Congress Centre",
      "description": "Fan-run anime convention.",
      "booth": "A12",
      "artistAlleyHours": ["Fri 4pm-9pm", "Sat 10am-7pm"]
    },
    {
      "id": "otakuthon-2025",
      "name": "Otakuthon 2025",
      "location": "Montreal, QC",
      "dates": { "start": "2025-08-08", "end": "2025-08-10" },
      "description": "Quebec's largest anime convention.",
      "booth": "B03"
    },
    {
      "id": "fan-expo-2025",
      "name": "Fan Expo 2025",
      "location": "Toronto, ON",
      "dates": { "start": "2025-08-28", "end": "2025-08-31" }
    },
    {
      "id": "anime-revolution-2024",
      "name": "Anime Revolution 2024",
      "location": "Vancouver, BC",
      "dates": { "start": "2024-07-19", "end": "2024-07-21" },
      "eventRecap": "Great crowd at the alley table this year."
    }
  ]
}"#
}

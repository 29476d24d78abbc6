//! Shared fixtures for integration tests

#![allow(dead_code, reason = "Not every test binary uses every fixture")]
#![expect(clippy::unwrap_used, reason = "This is a test module")]

use std::io::{Cursor, Write as _};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Header row of every list in an export
pub const HEADER: &str = "Date,Name,Year,Letterboxd URI";

/// Build one list as CSV, quoting titles the way exports do
pub fn list_csv(movies: &[(&str, &str)]) -> String {
    let mut csv = format!("{HEADER}\n");
    for (index, (title, year)) in movies.iter().enumerate() {
        let title = if title.contains(',') || title.contains('"') {
            format!("\"{}\"", title.replace('"', "\"\""))
        } else {
            (*title).to_owned()
        };
        csv.push_str(&format!(
            "2024-01-{:02},{title},{year},https://boxd.it/{index}\n",
            index + 1
        ));
    }
    csv
}

/// Build a zip archive from member names and contents
pub fn zip_bytes(members: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in members {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Build a complete export with the default layout
pub fn export_zip(
    watched: &[(&str, &str)],
    liked: &[(&str, &str)],
    watchlist: &[(&str, &str)],
) -> Vec<u8> {
    zip_bytes(&[
        ("profile.csv", "Date Joined,Username\n2020-01-01,someone\n"),
        ("watched.csv", list_csv(watched).as_str()),
        ("likes/films.csv", list_csv(liked).as_str()),
        ("watchlist.csv", list_csv(watchlist).as_str()),
    ])
}

/// Alice's export used across tests
pub fn alice_export() -> Vec<u8> {
    export_zip(
        &[
            ("Heat", "1995"),
            ("Alien", "1979"),
            ("Crouching Tiger, Hidden Dragon", "2000"),
            ("Dune", "1984"),
        ],
        &[("Alien", "1979"), ("Crouching Tiger, Hidden Dragon", "2000")],
        &[("Stalker", "1979")],
    )
}

/// Bob's export used across tests
pub fn bob_export() -> Vec<u8> {
    export_zip(
        &[
            ("Heat", "1995"),
            ("Crouching Tiger, Hidden Dragon", "2000"),
            ("Dune", "2021"),
            ("Stalker", "1979"),
        ],
        &[("Heat", "1995"), ("Stalker", "1979")],
        &[("Alien", "1979"), ("Dune", "1984")],
    )
}

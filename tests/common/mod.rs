//! Shared London fixture for integration tests.

use metroplan::prelude::*;

pub fn london_stations() -> Vec<StationRecord> {
    vec![
        StationRecord::new("King's Cross", 51.5308, -0.1238),
        StationRecord::new("Oxford Circus", 51.5154, -0.1410),
        StationRecord::new("Green Park", 51.5067, -0.1428),
        StationRecord::new("Victoria Station", 51.4965, -0.1447),
        StationRecord::new("Euston", 51.5281, -0.1337),
        StationRecord::new("Baker Street", 51.5231, -0.1569),
        StationRecord::new("Paddington", 51.5150, -0.1750),
        StationRecord::new("Bond Street", 51.5145, -0.1494),
    ]
}

pub fn london_line_map() -> EdgeSpec {
    EdgeSpec::line_map([
        (
            "Victoria",
            vec![
                ("King's Cross", "Oxford Circus"),
                ("Oxford Circus", "Green Park"),
                ("Green Park", "Victoria Station"),
            ],
        ),
        (
            "Northern",
            vec![("King's Cross", "Euston"), ("Euston", "Victoria Station")],
        ),
        (
            "Bakerloo",
            vec![
                ("Baker Street", "Oxford Circus"),
                ("Paddington", "Baker Street"),
            ],
        ),
        (
            "Jubilee",
            vec![
                ("Bond Street", "Green Park"),
                ("Oxford Circus", "Bond Street"),
            ],
        ),
        ("Circle", vec![("Bond Street", "Paddington")]),
    ])
}

pub fn london_flat_text() -> EdgeSpec {
    EdgeSpec::flat_text(
        "King's Cross - Oxford Circus - Victoria\n\
         Oxford Circus - Green Park - Victoria\n\
         Green Park - Victoria Station - Victoria\n\
         King's Cross - Euston - Northern\n\
         Euston - Victoria Station - Northern\n\
         Baker Street - Oxford Circus - Bakerloo\n\
         Paddington - Baker Street - Bakerloo\n\
         Bond Street - Green Park - Jubilee\n\
         Oxford Circus - Bond Street - Jubilee\n\
         Bond Street - Paddington - Circle",
    )
}

pub fn london() -> MetroNetwork {
    create_metro_network(&london_stations(), &london_line_map()).unwrap()
}

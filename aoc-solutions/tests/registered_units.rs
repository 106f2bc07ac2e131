use aoc_solutions as _;
use aoc_solver::{LineError, LineSource, ParseError, SolverError, SolverRegistryBuilder};
use indoc::indoc;

const ALMANAC: &str = indoc! {"
    seeds: 79 14 55 13

    seed-to-soil map:
    50 98 2
    52 50 48

    soil-to-fertilizer map:
    0 15 37
    37 52 2
    39 0 15

    fertilizer-to-water map:
    49 53 8
    0 11 42
    42 0 7
    57 7 4

    water-to-light map:
    88 18 7
    18 25 70

    light-to-temperature map:
    45 77 23
    81 45 19
    68 64 13

    temperature-to-humidity map:
    0 69 1
    1 0 69

    humidity-to-location map:
    60 56 37
    56 93 4
"};

#[test]
fn test_all_2023_units_register() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2023)
        .unwrap()
        .build();

    let days: Vec<(u8, u8)> = registry
        .storage()
        .iter_info()
        .map(|info| (info.day, info.parts))
        .collect();
    assert_eq!(
        days,
        vec![(1, 2), (2, 2), (3, 2), (4, 2), (5, 1), (6, 2), (7, 2)]
    );
}

#[test]
fn test_tag_filter() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"remap"))
        .unwrap()
        .build();
    assert_eq!(registry.storage().len(), 1);
    assert!(registry.storage().contains(2023, 5));
}

#[test]
fn test_almanac_answer_sentence() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry
        .create_solver(2023, 5, LineSource::from_text(ALMANAC).boxed())
        .unwrap();
    assert_eq!(solver.parts(), 1);
    assert_eq!(
        solver.solve(1).unwrap().sentence(),
        "The smallest location number is 35"
    );
    assert!(solver.solve(2).is_err());
}

#[test]
fn test_malformed_almanac_reports_line() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let input = "seeds: 1 2\n\nseed-to-soil map:\n50 98\n";
    let err = registry
        .create_solver(2023, 5, LineSource::from_text(input).boxed())
        .err()
        .unwrap();
    match err {
        SolverError::Parse(ParseError::Line {
            number: 4,
            source: LineError::Malformed(_),
            ..
        }) => {}
        other => panic!("unexpected error {other:?}"),
    }
}

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, LineSource, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};
use std::io::BufRead;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 24, tags = ["macro-test", "count"])]
pub struct LineCounter;

impl AocParser for LineCounter {
    type SharedData = usize;

    fn parse<R: BufRead>(mut source: LineSource<R>) -> Result<usize, ParseError> {
        source.try_fold(0, |count, line| line.map(|_| count + 1))
    }
}

impl PartSolver<1> for LineCounter {
    fn solve(shared: &mut usize) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 25)]
pub struct Untagged;

impl AocParser for Untagged {
    type SharedData = ();

    fn parse<R: BufRead>(_source: LineSource<R>) -> Result<(), ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(_shared: &mut ()) -> Result<String, SolveError> {
        Ok("0".to_string())
    }
}

#[test]
fn test_plugin_is_discovered() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let info = registry.storage().get_info(2016, 24).unwrap();
    assert_eq!(info.parts, 1);

    let source = LineSource::from_text("a\nb\nc").boxed();
    let mut solver = registry.create_solver(2016, 24, source).unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
}

#[test]
fn test_tag_filter_selects_plugins() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2016, 24));
    assert!(!registry.storage().contains(2016, 25));
}

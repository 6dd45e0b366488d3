use mclp::solver::exhaustive::search;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    search::run()
}

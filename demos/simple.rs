use prop_rs::ast::Assignment;
use prop_rs::parser::parse;
use prop_rs::simplify;
use prop_rs::table::TruthTable;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let expr = parse("a -> (b | !c)")?;
    println!("expr = {}", expr);
    println!("final = {}", expr.to_final_string());
    println!("variables = {:?}", expr.variables());

    let assignment = Assignment::from([('a', true), ('b', false), ('c', true)]);
    println!("assignment = {:?}", assignment);
    println!("value = {}", expr.evaluate(&assignment)?);

    let expr = parse("(a | b) & (a | c)")?;
    println!("expr = {}", expr);
    let factored = simplify::distributive(expr);
    println!("factored = {}", factored);
    let swapped = simplify::commutative(factored);
    println!("swapped = {}", swapped);

    let table = TruthTable::new("!a | b = a -> b")?;
    println!("{}", table);

    Ok(())
}

use htuple::tuple;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn setup_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn main() {
    setup_logging();

    let tup = tuple!(1, 5, String::from("hello"), 't', vec![1, 2, 3, 4, 5]);
    info!(arity = tup.arity(), "built demo tuple");

    println!("{}", tup.get::<2>());
}

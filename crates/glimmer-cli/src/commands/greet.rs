use clap::Args;
use glimmer_core::{ComplimentEngine, Config};

#[derive(Args)]
pub struct GreetArgs {
    /// Recognized identifiers, in detection order ("unknown" for
    /// unrecognized faces)
    #[arg(required = true)]
    pub names: Vec<String>,
}

pub fn run(args: GreetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut engine = ComplimentEngine::new(&config);
    // A policy with nothing to say is a no-op, not an error.
    if let Some(text) = engine.greeting_for(&args.names) {
        println!("{text}");
    }
    Ok(())
}

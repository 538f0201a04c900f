use chrono::{Local, Timelike};
use clap::Args;
use glimmer_core::{ComplimentEngine, Config};

#[derive(Args)]
pub struct ShowArgs {
    /// Hour override (0-23)
    #[arg(long)]
    pub hour: Option<u32>,
    /// Date override (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Apply a weather icon code first (e.g. "10d")
    #[arg(long)]
    pub weather_icon: Option<String>,
    /// Print the full render output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    config.validate()?;

    if let Some(hour) = args.hour {
        if hour > 23 {
            return Err(format!("hour {hour} is out of range (0-23)").into());
        }
    }

    let mut engine = ComplimentEngine::new(&config);
    if let Some(icon) = &args.weather_icon {
        engine.set_weather_icon(icon);
    }

    let hour = args.hour.unwrap_or_else(|| Local::now().hour());
    let date = args.date.unwrap_or_else(|| engine.current_date());
    let output = engine.render_at(hour, &date);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for line in output.lines() {
            println!("{line}");
        }
    }
    Ok(())
}

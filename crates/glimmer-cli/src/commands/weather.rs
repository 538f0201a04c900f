use glimmer_core::weather;

pub fn run(icon: &str) -> Result<(), Box<dyn std::error::Error>> {
    match weather::category_for_icon(icon) {
        Some(category) => {
            println!("{category}");
            Ok(())
        }
        None => Err(format!("unmapped icon code: {icon}").into()),
    }
}

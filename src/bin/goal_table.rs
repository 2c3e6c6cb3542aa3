//! Utility to print the daily goal for every activity/weather combination
//!
//! Usage: goal_table <weight> [kg|lb]

use hydrate::hydration::{
    activity_levels, calculate_daily_water_goal, format_amount, is_unusual_weight,
    validate_weight, weather_conditions, weight_in_kg,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let weight: f64 = args
        .next()
        .ok_or("Usage: goal_table <weight> [kg|lb]")?
        .parse()?;
    let unit = args.next().unwrap_or_else(|| "kg".to_string());

    if !validate_weight(Some(weight), &unit) {
        if is_unusual_weight(weight, &unit) {
            eprintln!("Warning: {} {} is unusually low, continuing anyway", weight, unit);
        } else {
            return Err(format!("Weight {} {} is outside 20-300 kg", weight, unit).into());
        }
    }

    let weight_kg = weight_in_kg(weight, &unit);
    println!("Daily water goal for {:.1} kg", weight_kg);
    println!();

    print!("{:<12}", "");
    for weather in weather_conditions() {
        print!("{:>8}", weather);
    }
    println!();

    for activity in activity_levels() {
        print!("{:<12}", activity);
        for weather in weather_conditions() {
            let goal = calculate_daily_water_goal(weight_kg, activity, weather)?;
            print!("{:>8}", format_amount(goal));
        }
        println!();
    }

    Ok(())
}

//! Interactive menu loop driving the session state machine.

use anyhow::Result;
use inquire::Text;
use tracing::debug;
use wear_core::{ClothingRecommendation, RecommendationClient, Session, WeatherClient};

/// One dispatchable menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SetDate,
    SetZipcode,
    FetchWeather,
    SetGender,
    Recommend,
    Quit,
}

impl MenuChoice {
    /// Parse a single-character command, case-insensitively. Anything else
    /// is `None` and the loop reprompts without touching the session.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "a" => Some(Self::SetDate),
            "b" => Some(Self::SetZipcode),
            "c" => Some(Self::FetchWeather),
            "d" => Some(Self::SetGender),
            "e" => Some(Self::Recommend),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Menu text shown before every prompt, reflecting current session values.
pub fn render_options(session: &Session) -> String {
    let weather_state = if session.weather.is_some() { "fetched" } else { "not fetched" };
    let gender = if session.gender.is_empty() { "Not set" } else { session.gender.as_str() };

    format!(
        "\nOptions:\n\
         a) Enter date (currently set to {})\n\
         b) Enter zipcode (currently set to {})\n\
         c) Get weather ({weather_state})\n\
         d) Enter gender (currently: {gender})\n\
         e) Get clothing recommendation\n\
         q) Quit",
        session.date, session.zipcode,
    )
}

/// Run the menu loop until the user quits.
///
/// Every command completes fully (including any blocking network call)
/// before the next prompt; failures from either client are printed and the
/// loop continues.
pub async fn run(
    mut session: Session,
    weather_client: &WeatherClient,
    recommendation_client: &RecommendationClient,
) -> Result<()> {
    loop {
        println!("{}", render_options(&session));
        let input = Text::new("Choose an option:").prompt()?;

        match MenuChoice::parse(&input) {
            Some(MenuChoice::SetDate) => {
                let entered =
                    Text::new(&format!("Enter the date (YYYY-MM-DD) [{}]:", session.date))
                        .prompt()?;
                // Empty input keeps the current date.
                if !entered.trim().is_empty() {
                    session.set_date(entered.trim().to_string());
                }
            }
            Some(MenuChoice::SetZipcode) => {
                let entered = Text::new(&format!("Enter the zipcode [{}]:", session.zipcode))
                    .prompt()?;
                if !entered.trim().is_empty() {
                    session.set_zipcode(entered.trim().to_string());
                }
            }
            Some(MenuChoice::FetchWeather) => {
                fetch_weather(&mut session, weather_client).await;
            }
            Some(MenuChoice::SetGender) => {
                // Replaced unconditionally, empty string included.
                let entered = Text::new("Enter your gender:").prompt()?;
                session.set_gender(entered);
            }
            Some(MenuChoice::Recommend) => {
                recommend(&session, recommendation_client).await;
            }
            Some(MenuChoice::Quit) => break,
            None => println!("Invalid option. Please try again."),
        }
    }

    Ok(())
}

async fn fetch_weather(session: &mut Session, client: &WeatherClient) {
    println!("Fetching weather for {} at zipcode {}...", session.date, session.zipcode);

    match client.fetch_weather(&session.date, &session.zipcode).await {
        Ok(weather) => {
            let rendered = serde_json::to_string_pretty(&weather)
                .unwrap_or_else(|_| format!("{weather:?}"));
            println!("Weather: {rendered}");
            session.set_weather(weather);
        }
        Err(err) => {
            // Weather stays unset so the next recommendation attempt
            // short-circuits instead of using stale data.
            debug!(error = %err, "weather fetch failed");
            println!("{err}");
        }
    }
}

async fn recommend(session: &Session, client: &RecommendationClient) {
    let Some(weather) = session.recommendation_inputs() else {
        println!(
            "Please make sure you have entered the date, zipcode, fetched the weather, \
             and entered your gender."
        );
        return;
    };
    if session.api_key().is_empty() {
        println!("OpenAI API Key not found. Cannot get recommendation.");
        return;
    }

    println!("Getting clothing recommendations from OpenAI...");

    match client.recommend(&session.date, &session.zipcode, weather, &session.gender).await {
        Ok(recommendation) => print_recommendation(&recommendation),
        Err(err) if err.is_auth() => {
            println!("OpenAI rejected the API key: {err}");
        }
        Err(err) => {
            debug!(error = %err, "recommendation failed");
            println!("{err}");
        }
    }
}

fn print_recommendation(recommendation: &ClothingRecommendation) {
    println!("\nClothing recommendation:");
    println!("  head:  {}", recommendation.head);
    println!("  torso: {}", recommendation.torso);
    println!("  legs:  {}", recommendation.legs);
    println!("  feet:  {}", recommendation.feet);
    println!("  notes: {}", recommendation.notes);
}

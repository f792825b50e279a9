use rocket::*;

mod cors;
mod database;
mod score;

use database::Db;

#[launch]
async fn rocket() -> _ {
    // Connect to a database
    dotenv::dotenv().ok();
    let database_url = dotenv::var("DATABASE_URL").unwrap_or_default();

    // A failed connection is not fatal: the server still starts,
    // and every request that touches the store answers with a 500
    let db = match database::connect(&database_url).await {
        Ok(pool) => {
            println!("Connected to the database");
            Db::new(Some(pool))
        }
        Err(err) => {
            eprintln!("Database connection error: {}", err);
            Db::new(None)
        }
    };

    build_rocket(db)
}

fn build_rocket(db: Db) -> Rocket<Build> {
    let port = dotenv::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(3000);
    let figment = Config::figment().merge(("port", port));

    // Build the rocket
    rocket::custom(figment)
        .mount(
            "/",
            routes![
                index,
                cors::preflight,
                database::requests::get_leaderboard,
                database::requests::submit_score,
            ],
        )
        .attach(cors::Cors)
        .manage(db)
}

#[get("/")]
fn index() -> &'static str {
    "This is an online leaderboard server!"
}

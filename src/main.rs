use structopt::StructOpt;

mod app;
mod message;
mod graphics;
mod scene;
mod math;
mod r#type;
mod error;
mod logger;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

const LOG_TARGET: &'static str = "main";

fn main() {
    let options = app::Options::from_args();

    let result = app::App::new(options).and_then(|mut app| app.run());

    if let Err(err) = result {
        log::error! {
            target: LOG_TARGET,
            "{}", err
        }

        std::process::exit(1);
    }
}

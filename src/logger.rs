use log::{set_logger, set_max_level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct Logger;

impl Logger {
    pub fn init(filter: LevelFilter) -> Result<(), SetLoggerError> {
        set_logger(&LOGGER).map(|()| set_max_level(filter))
    }

    fn format(record: &Record) -> String {
        format!(
            "|{}| {} -- {}",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            match record.level() {
                log::Level::Error | log::Level::Warn => eprintln!("{}", Self::format(record)),
                _ => println!("{}", Self::format(record)),
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: Logger = Logger;

#[cfg(test)]
mod tests {
    use crate::logger::Logger;

    #[test]
    fn test_format() {
        let line = Logger::format(
            &log::Record::builder()
                .level(log::Level::Info)
                .target("physics")
                .args(format_args!("tick #{}", 7))
                .build()
        );

        assert_eq!(line, "|INFO| physics -- tick #7");
    }
}

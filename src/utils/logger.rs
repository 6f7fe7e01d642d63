use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

pub fn init_logger() {
    // Установка базового фильтра и переопределение через переменные окружения
    let env = Env::default().filter_or("RUST_LOG", "warn,sub_studio=info");

    let mut builder = Builder::from_env(env);

    builder
        // Добавляем детальное логирование для конвейера субтитров
        .filter_module("sub_studio::subtitle", LevelFilter::Debug)
        // Форматирование логов
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}

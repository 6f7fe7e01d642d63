//! Пример использования sub-studio: прием загрузки с аннотациями
//! и получение сохраненного трека по базовому имени.

use sub_studio::config::TrackConfig;
use sub_studio::SubStudio;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    sub_studio::utils::init_logger();

    // Файловое хранилище в каталоге uploads/ рядом с процессом
    let studio = SubStudio::with_fs_storage(TrackConfig::default());

    let annotations = r#"[
        {"timestamp": 0.0, "text": "Привет!"},
        {"timestamp": 2.5, "text": "Это пример аннотаций"},
        {"timestamp": 5.0, "text": "Каждая реплика видна одну секунду"}
    ]"#;

    let base_name = studio
        .store_upload("demo.mp4", b"not a real video", annotations)
        .await?;
    println!("Stored under base name: {}", base_name);

    let track = studio.fetch_track(&base_name).await?;
    println!("--- {}.srt ---", base_name);
    println!("{}", track);

    Ok(())
}

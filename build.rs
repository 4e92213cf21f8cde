fn main() {
    // Tauri-generated build configuration (reads tauri.conf.json).
    tauri_build::build();
}

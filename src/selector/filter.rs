/// File suffixes accepted as calibration inputs
pub const CALIBRATION_EXTENSIONS: [&str; 7] =
    [".jpg", ".bmp", ".png", ".jpeg", ".jfif", ".npy", ".npz"];

/// Return true if the file name ends with a recognized extension (case-insensitive)
pub fn is_calibration_file_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    CALIBRATION_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AudioCodingFormat {
    UncompressedNativeEndian,
    Adpcm,
    Mp3,
    UncompressedLittleEndian,
    Nellymoser16,
    Nellymoser8,
    Nellymoser,
    Speex,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SoundType {
    #[default]
    Mono,
    Stereo,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Playback parameters shared by start-sound tags and button sounds.
pub struct SoundInfo {
    #[serde(default)]
    pub sync_stop: bool,
    #[serde(default)]
    pub sync_no_multiple: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_point: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_point: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_count: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope_records: Option<Vec<SoundEnvelope>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SoundEnvelope {
    /// Position in 44 kHz samples.
    pub pos44: u32,
    pub left_level: u16,
    pub right_level: u16,
}

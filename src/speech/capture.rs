//! Microphone capture using cpal

use crate::error::{AssistError, AssistResult};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, SampleFormat};
use hound::{WavSpec, WavWriter};
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Mono 16-bit recording plus the rate it was captured at
#[derive(Debug, Clone, Default)]
pub struct Recording {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

/// Record from an input device for a fixed window (blocking)
pub fn record(device_index: Option<usize>, duration: Duration) -> AssistResult<Recording> {
    let device = select_device(device_index)?;
    let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());
    info!("🎙️ Listening on {} for {:?}...", device_name, duration);

    let supported = device
        .default_input_config()
        .map_err(|e| AssistError::Audio(e.to_string()))?;
    let sample_format = supported.sample_format();
    let config: cpal::StreamConfig = supported.into();
    let channels = config.channels as usize;

    let samples = Arc::new(Mutex::new(Vec::<i16>::new()));
    let err_fn = |err: cpal::StreamError| warn!("Audio stream error: {}", err);

    let stream = match sample_format {
        SampleFormat::F32 => {
            let shared = samples.clone();
            device.build_input_stream(
                &config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    push_frames(&shared, data, channels, f32_to_i16)
                },
                err_fn,
                None,
            )
        }
        SampleFormat::I16 => {
            let shared = samples.clone();
            device.build_input_stream(
                &config,
                move |data: &[i16], _: &cpal::InputCallbackInfo| {
                    push_frames(&shared, data, channels, |s| s)
                },
                err_fn,
                None,
            )
        }
        other => {
            return Err(AssistError::Audio(format!(
                "Unsupported sample format: {:?}",
                other
            )))
        }
    }
    .map_err(|e| AssistError::Audio(e.to_string()))?;

    stream
        .play()
        .map_err(|e| AssistError::Audio(e.to_string()))?;
    std::thread::sleep(duration);
    drop(stream);

    let samples = samples.lock().map_err(|e| AssistError::Audio(e.to_string()))?.clone();
    debug!("Captured {} samples at {} Hz", samples.len(), config.sample_rate.0);
    Ok(Recording {
        samples,
        sample_rate: config.sample_rate.0,
    })
}

fn select_device(device_index: Option<usize>) -> AssistResult<Device> {
    let host = cpal::default_host();
    let device = match device_index {
        Some(idx) => host
            .input_devices()
            .map_err(|e| AssistError::Audio(e.to_string()))?
            .nth(idx),
        None => host.default_input_device(),
    };
    device.ok_or_else(|| AssistError::Audio("No input device".to_string()))
}

fn f32_to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}

/// Downmix interleaved frames to mono and append them
fn push_frames<T: Copy>(
    buffer: &Arc<Mutex<Vec<i16>>>,
    data: &[T],
    channels: usize,
    convert: impl Fn(T) -> i16,
) {
    let Ok(mut guard) = buffer.lock() else {
        return;
    };
    for frame in data.chunks(channels.max(1)) {
        let sum: i32 = frame.iter().map(|&s| convert(s) as i32).sum();
        guard.push((sum / frame.len() as i32) as i16);
    }
}

/// Calculate RMS energy, used to skip silent recordings
pub fn calculate_energy(samples: &[i16]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum: i64 = samples.iter().map(|&s| (s as i64).pow(2)).sum();
    (sum as f32 / samples.len() as f32).sqrt()
}

/// Encode a recording as an in-memory 16-bit mono WAV file
pub fn encode_wav(recording: &Recording) -> AssistResult<Vec<u8>> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: recording.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut bytes = Vec::new();
    {
        let mut writer = WavWriter::new(Cursor::new(&mut bytes), spec)
            .map_err(|e| AssistError::Audio(e.to_string()))?;
        for &sample in &recording.samples {
            writer
                .write_sample(sample)
                .map_err(|e| AssistError::Audio(e.to_string()))?;
        }
        writer
            .finalize()
            .map_err(|e| AssistError::Audio(e.to_string()))?;
    }
    Ok(bytes)
}

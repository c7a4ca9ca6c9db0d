use super::*;
use crate::encode::sink::AudioInputConfig;
use crate::foundation::core::Fps;

fn frame(data: Vec<u8>, premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data,
        premultiplied,
    }
}

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(24, 1).unwrap(),
        frame_count: 1,
        audio: None,
    }
}

#[test]
fn transparent_pixel_becomes_background() {
    let mut dst = vec![0u8; 4];
    flatten_over_background(&mut dst, &frame(vec![0, 0, 0, 0], true), Rgb8::new(10, 20, 30))
        .unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn opaque_pixel_is_copied() {
    let mut dst = vec![0u8; 4];
    flatten_over_background(&mut dst, &frame(vec![1, 2, 3, 255], true), Rgb8::WHITE).unwrap();
    assert_eq!(dst, vec![1, 2, 3, 255]);
}

#[test]
fn straight_alpha_is_premultiplied_before_compositing() {
    let mut dst = vec![0u8; 4];
    flatten_over_background(&mut dst, &frame(vec![255, 0, 0, 128], false), Rgb8::BLACK).unwrap();
    assert_eq!(dst, vec![128, 0, 0, 255]);
}

#[test]
fn buffer_length_mismatch_is_rejected() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_over_background(&mut dst, &frame(vec![0; 4], true), Rgb8::BLACK).is_err());
}

#[test]
fn odd_dimensions_are_rejected_before_spawning() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(
        std::env::temp_dir().join("lyricreel_odd.mp4"),
        Rgb8::WHITE,
    ));
    let err = sink.begin(cfg(1081, 1920)).unwrap_err();
    assert!(err.to_string().contains("even"));
    assert!(sink.begin(cfg(0, 1920)).is_err());
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4", Rgb8::WHITE));
    assert!(sink.push_frame(FrameIndex(0), &frame(vec![0; 4], true)).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn command_muxes_audio_and_stops_at_shortest() {
    let sink = FfmpegSink::new(FfmpegSinkOpts::new("out/song.mp4", Rgb8::WHITE));
    let mut c = cfg(1080, 1920);
    c.audio = Some(AudioInputConfig {
        path: "song.f32le".into(),
        sample_rate: 48_000,
        channels: 2,
    });
    let cmd = sink.build_command(&c).unwrap();
    let args: Vec<String> = cmd
        .get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    for expected in ["1080x1920", "24/1", "f32le", "48000", "aac", "-shortest", "libx264"] {
        assert!(args.iter().any(|a| a == expected), "missing {expected} in {args:?}");
    }
    assert_eq!(args.last().map(String::as_str), Some("out/song.mp4"));

    c.audio = None;
    let cmd = sink.build_command(&c).unwrap();
    assert!(cmd.get_args().any(|a| a == "-an"));
}

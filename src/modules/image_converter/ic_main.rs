use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::ic_codec::{DecodedImage, ImageCodec};
use super::ic_error::{ConvertError, Result};
use super::ic_formats::OutputFormat;

/// Selections made so far in this run. Never written to disk.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    input_path: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    target_format: OutputFormat,
}

impl SessionState {
    pub fn input_path(&self) -> Option<&Path> {
        self.input_path.as_deref()
    }

    pub fn output_folder(&self) -> Option<&Path> {
        self.output_folder.as_deref()
    }

    pub fn target_format(&self) -> OutputFormat {
        self.target_format
    }
}

/// Snapshot of the session taken at the start of each conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_folder: PathBuf,
    pub target_format: OutputFormat,
}

impl ConversionRequest {
    pub fn from_session(session: &SessionState) -> Result<Self> {
        match (&session.input_path, &session.output_folder) {
            (Some(input), Some(folder)) => Ok(Self {
                input_path: input.clone(),
                output_folder: folder.clone(),
                target_format: session.target_format,
            }),
            _ => Err(ConvertError::MissingInput),
        }
    }

    pub fn input_file_name(&self) -> String {
        display_name(&self.input_path)
    }

    /// `<output_folder>/<input stem>.<extension>`
    pub fn output_path(&self) -> Option<PathBuf> {
        let stem = self.input_path.file_stem()?.to_string_lossy();
        let file_name = format!("{}.{}", stem, self.target_format.extension());
        Some(self.output_folder.join(file_name))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Idle,
    Converting,
    Saved(String),
    Failed(String),
}

impl Status {
    pub fn text(&self) -> String {
        match self {
            Status::Idle => String::new(),
            Status::Converting => "Converting...".to_string(),
            Status::Saved(name) => format!("Saved: {}", name),
            Status::Failed(message) => message.clone(),
        }
    }
}

pub struct ConversionController<C: ImageCodec> {
    codec: C,
    session: SessionState,
    status: Status,
}

impl<C: ImageCodec> ConversionController<C> {
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            session: SessionState::default(),
            status: Status::Idle,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// `None` or an empty path means the picker was cancelled; the previous
    /// selection, if any, is kept.
    pub fn set_input_path(&mut self, path: Option<PathBuf>) {
        if let Some(path) = non_empty(path) {
            info!("Selected input image {}", path.display());
            self.session.input_path = Some(path);
            self.status = Status::Idle;
        }
    }

    pub fn set_output_folder(&mut self, path: Option<PathBuf>) {
        if let Some(path) = non_empty(path) {
            info!("Selected output folder {}", path.display());
            self.session.output_folder = Some(path);
            self.status = Status::Idle;
        }
    }

    pub fn set_target_format(&mut self, format: OutputFormat) {
        self.session.target_format = format;
    }

    pub fn is_convert_enabled(&self) -> bool {
        self.session.input_path.is_some() && self.session.output_folder.is_some()
    }

    /// Shows "Converting..." until the next `convert` finishes.
    pub fn mark_converting(&mut self) {
        self.status = Status::Converting;
    }

    /// Converts the selected image and returns the path that was written.
    /// The status line is updated either way.
    pub fn convert(&mut self) -> Result<PathBuf> {
        let result = ConversionRequest::from_session(&self.session)
            .and_then(|request| convert_request(&self.codec, &request));

        match &result {
            Ok(path) => {
                info!("Saved {}", path.display());
                self.status = Status::Saved(display_name(path));
            }
            Err(e) => {
                match e.detail() {
                    Some(detail) => warn!("Conversion failed: {} ({})", e, detail),
                    None => warn!("Conversion failed: {}", e),
                }
                self.status = e.status_message().map_or(Status::Idle, Status::Failed);
            }
        }
        result
    }
}

/// Runs one conversion. The decoded image is owned by this function, so it is
/// dropped exactly once whichever way it returns.
pub fn convert_request<C: ImageCodec>(codec: &C, request: &ConversionRequest) -> Result<PathBuf> {
    info!(
        "Converting {} to {}",
        request.input_path.display(),
        request.target_format.codec()
    );

    let mut image = codec
        .open(&request.input_path)
        .map_err(|e| ConvertError::UnreadableImage {
            file_name: request.input_file_name(),
            reason: e.to_string(),
        })?;

    let mode = image.color_mode();
    debug!("Source color mode {}", mode);
    if !request.target_format.supports_alpha() && mode.has_alpha() {
        info!(
            "Converting image mode from {} to RGB for {}",
            mode,
            request.target_format.codec()
        );
        image = image.into_rgb();
    }

    let output_path = request
        .output_path()
        .ok_or_else(|| ConvertError::SaveFailed("Input path has no file name".to_string()))?;
    debug!("Output path {}", output_path.display());

    image
        .save(&output_path, request.target_format)
        .map_err(|e| ConvertError::SaveFailed(e.to_string()))?;

    Ok(output_path)
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::image_converter::ic_codec::ColorMode;
    use crate::modules::image_converter::ic_error::CodecError;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct Ledger {
        opened: Cell<usize>,
        released: Cell<usize>,
        saved: RefCell<Vec<(PathBuf, OutputFormat, ColorMode)>>,
    }

    struct MockImage {
        mode: ColorMode,
        fail_save: bool,
        ledger: Rc<Ledger>,
    }

    impl DecodedImage for MockImage {
        fn color_mode(&self) -> ColorMode {
            self.mode
        }

        fn into_rgb(mut self) -> Self {
            self.mode = ColorMode::Rgb;
            self
        }

        fn save(&self, path: &Path, format: OutputFormat) -> std::result::Result<(), CodecError> {
            if self.fail_save {
                return Err(CodecError::Save("No space left on device".to_string()));
            }
            self.ledger
                .saved
                .borrow_mut()
                .push((path.to_path_buf(), format, self.mode));
            Ok(())
        }
    }

    impl Drop for MockImage {
        fn drop(&mut self) {
            self.ledger.released.set(self.ledger.released.get() + 1);
        }
    }

    struct MockCodec {
        mode: ColorMode,
        fail_open: bool,
        fail_save: bool,
        ledger: Rc<Ledger>,
    }

    impl MockCodec {
        fn with_mode(mode: ColorMode) -> Self {
            Self {
                mode,
                fail_open: false,
                fail_save: false,
                ledger: Rc::new(Ledger::default()),
            }
        }
    }

    impl ImageCodec for MockCodec {
        type Image = MockImage;

        fn open(&self, _path: &Path) -> std::result::Result<MockImage, CodecError> {
            if self.fail_open {
                return Err(CodecError::Open("cannot identify image file".to_string()));
            }
            self.ledger.opened.set(self.ledger.opened.get() + 1);
            Ok(MockImage {
                mode: self.mode,
                fail_save: self.fail_save,
                ledger: Rc::clone(&self.ledger),
            })
        }
    }

    fn ready_controller(codec: MockCodec) -> ConversionController<MockCodec> {
        let mut controller = ConversionController::new(codec);
        controller.set_input_path(Some(PathBuf::from("/photos/holiday.final.png")));
        controller.set_output_folder(Some(PathBuf::from("/out")));
        controller
    }

    #[test]
    fn enabled_only_with_both_selections() {
        let mut controller = ConversionController::new(MockCodec::with_mode(ColorMode::Rgb));
        assert!(!controller.is_convert_enabled());

        controller.set_input_path(None);
        controller.set_output_folder(Some(PathBuf::new()));
        assert!(!controller.is_convert_enabled());

        controller.set_input_path(Some(PathBuf::from("a.png")));
        assert!(!controller.is_convert_enabled());

        controller.set_output_folder(None);
        assert!(!controller.is_convert_enabled());

        controller.set_output_folder(Some(PathBuf::from("/out")));
        assert!(controller.is_convert_enabled());

        controller.set_input_path(None);
        controller.set_output_folder(Some(PathBuf::new()));
        controller.set_target_format(OutputFormat::Gif);
        assert!(controller.is_convert_enabled());
    }

    #[test]
    fn folder_without_input_stays_disabled() {
        let mut controller = ConversionController::new(MockCodec::with_mode(ColorMode::Rgb));
        controller.set_output_folder(Some(PathBuf::from("/out")));
        controller.set_input_path(None);
        controller.set_input_path(Some(PathBuf::new()));
        assert!(!controller.is_convert_enabled());
        assert_eq!(controller.session().output_folder(), Some(Path::new("/out")));
    }

    #[test]
    fn cancelled_pick_keeps_previous_selection() {
        let mut controller = ready_controller(MockCodec::with_mode(ColorMode::Rgb));
        controller.set_input_path(None);
        assert_eq!(
            controller.session().input_path(),
            Some(Path::new("/photos/holiday.final.png"))
        );
    }

    #[test]
    fn new_selection_clears_status() {
        let mut codec = MockCodec::with_mode(ColorMode::Rgb);
        codec.fail_open = true;
        let mut controller = ready_controller(codec);
        assert!(controller.convert().is_err());
        assert_eq!(controller.status(), &Status::Failed("Error: Invalid image file".to_string()));

        controller.set_input_path(None);
        assert_ne!(controller.status(), &Status::Idle);

        controller.set_input_path(Some(PathBuf::from("b.png")));
        assert_eq!(controller.status(), &Status::Idle);
    }

    #[test]
    fn missing_input_does_no_io() {
        let codec = MockCodec::with_mode(ColorMode::Rgb);
        let ledger = Rc::clone(&codec.ledger);
        let mut controller = ConversionController::new(codec);
        controller.set_input_path(Some(PathBuf::from("a.png")));

        controller.mark_converting();
        let result = controller.convert();
        assert!(matches!(result, Err(ConvertError::MissingInput)));
        assert_eq!(ledger.opened.get(), 0);
        assert_eq!(ledger.released.get(), 0);
        assert_eq!(controller.status(), &Status::Idle);
    }

    #[test]
    fn converting_lasts_until_convert_returns() {
        let mut controller = ready_controller(MockCodec::with_mode(ColorMode::Rgb));
        controller.mark_converting();
        assert_eq!(controller.status(), &Status::Converting);
        assert_eq!(controller.status().text(), "Converting...");

        controller.convert().unwrap();
        assert_eq!(controller.status(), &Status::Saved("holiday.final.png".to_string()));
    }

    #[test]
    fn output_name_uses_stem_and_format_extension() {
        for format in OutputFormat::all() {
            let codec = MockCodec::with_mode(ColorMode::Rgb);
            let mut controller = ready_controller(codec);
            controller.set_target_format(format);

            let path = controller.convert().unwrap();
            assert_eq!(path, PathBuf::from(format!("/out/holiday.final.{}", format.extension())));
            let expected_name = format!("holiday.final.{}", format.extension());
            assert_eq!(controller.status(), &Status::Saved(expected_name));
        }
    }

    #[test]
    fn alpha_is_dropped_only_for_jpeg_and_bmp() {
        let modes = [
            ColorMode::Rgba,
            ColorMode::La,
            ColorMode::Pa,
            ColorMode::Rgb,
            ColorMode::L,
            ColorMode::P,
        ];
        for mode in modes {
            for format in OutputFormat::all() {
                let codec = MockCodec::with_mode(mode);
                let ledger = Rc::clone(&codec.ledger);
                let mut controller = ready_controller(codec);
                controller.set_target_format(format);
                controller.convert().unwrap();

                let saved = ledger.saved.borrow();
                let (_, saved_format, saved_mode) = &saved[0];
                assert_eq!(*saved_format, format);

                let expected = if !format.supports_alpha() && mode.has_alpha() {
                    ColorMode::Rgb
                } else {
                    mode
                };
                assert_eq!(*saved_mode, expected, "{} -> {}", mode, format.codec());
            }
        }
    }

    #[test]
    fn released_once_on_success() {
        let codec = MockCodec::with_mode(ColorMode::Rgba);
        let ledger = Rc::clone(&codec.ledger);
        let mut controller = ready_controller(codec);
        controller.set_target_format(OutputFormat::Jpeg);

        controller.convert().unwrap();
        assert_eq!(ledger.opened.get(), 1);
        assert_eq!(ledger.released.get(), 1);
    }

    #[test]
    fn unreadable_image_never_acquires() {
        let mut codec = MockCodec::with_mode(ColorMode::Rgb);
        codec.fail_open = true;
        let ledger = Rc::clone(&codec.ledger);
        let mut controller = ready_controller(codec);

        match controller.convert() {
            Err(ConvertError::UnreadableImage { file_name, .. }) => {
                assert_eq!(file_name, "holiday.final.png")
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(ledger.released.get(), 0);
        assert!(ledger.saved.borrow().is_empty());
        assert_eq!(controller.status(), &Status::Failed("Error: Invalid image file".to_string()));
    }

    #[test]
    fn save_failure_still_releases() {
        let mut codec = MockCodec::with_mode(ColorMode::Rgba);
        codec.fail_save = true;
        let ledger = Rc::clone(&codec.ledger);
        let mut controller = ready_controller(codec);
        controller.set_target_format(OutputFormat::Bmp);

        match controller.convert() {
            Err(ConvertError::SaveFailed(cause)) => assert_eq!(cause, "No space left on device"),
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(ledger.opened.get(), 1);
        assert_eq!(ledger.released.get(), 1);
    }

    #[test]
    fn failure_keeps_selections() {
        let mut codec = MockCodec::with_mode(ColorMode::Rgb);
        codec.fail_open = true;
        let mut controller = ready_controller(codec);
        controller.set_target_format(OutputFormat::Tiff);

        assert!(controller.convert().is_err());
        assert!(controller.is_convert_enabled());
        assert_eq!(controller.session().target_format(), OutputFormat::Tiff);
    }

    #[test]
    fn request_requires_both_paths() {
        let mut session = SessionState::default();
        session.input_path = Some(PathBuf::from("a.png"));
        assert!(matches!(
            ConversionRequest::from_session(&session),
            Err(ConvertError::MissingInput)
        ));
    }
}

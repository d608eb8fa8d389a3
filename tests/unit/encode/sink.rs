use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("sink_unit").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "clipboard denied",
        ))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn file_sink_creates_parents_and_writes() {
    let path = scratch_dir("creates").join("nested").join("out.html");
    let mut sink = FileSink::new(&path);
    sink.write_document("<html></html>").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
}

#[test]
fn file_sink_refuses_overwrite_unless_enabled() {
    let path = scratch_dir("overwrite").join("out.html");
    FileSink::new(&path).write_document("first").unwrap();

    let err = FileSink::new(&path).write_document("second").unwrap_err();
    assert!(err.is_sink());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");

    FileSink::new(&path)
        .overwrite(true)
        .write_document("second")
        .unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
}

#[test]
fn default_file_sink_targets_pixel_art_html() {
    assert_eq!(FileSink::default().path(), Path::new("pixel-art.html"));
}

#[test]
fn writer_sink_reports_failures_as_sink_errors() {
    let mut ok = WriterSink::new(Vec::new());
    ok.write_document("abc").unwrap();
    assert_eq!(ok.into_inner(), b"abc");

    let err = WriterSink::new(BrokenPipe).write_document("abc").unwrap_err();
    assert!(err.is_sink());
    assert!(err.to_string().contains("clipboard denied"));
}

#[test]
fn in_memory_sink_keeps_order() {
    let mut sink = InMemorySink::new();
    sink.write_document("a").unwrap();
    sink.write_document("b").unwrap();
    assert_eq!(sink.documents(), ["a".to_owned(), "b".to_owned()]);
    assert_eq!(sink.last(), Some("b"));
}

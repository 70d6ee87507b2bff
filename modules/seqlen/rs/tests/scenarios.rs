use biofasta_seqlen_rs::{seqlen, validate, Config, Summary, Validator};
use eyre::Result;

#[test]
fn scenarios() {
    for (body, firstlen, expected) in [
        // 10 residues per line, so the wrapped width is 11 with the LF
        ("ACGTACGTAA\nACGTACGT\n", 11, (18, 0)),
        ("ACGTACGTAA\n\nACGT\n", 11, (14, 1)),
        ("ACGTACGTAA\nACGT\nAC\n", 11, (16, 2)),
        ("", 0, (0, 0)),
        ("AC\rGT\n", 4, (4, 0)),
        ("AC\rGT\n", 5, (4, 0)),
        // The same bodies with a width that doesn't account for the LF
        ("ACGTACGTAA\nACGTACGT\n", 10, (18, 2)),
        ("ACGTACGTAA\n\nACGT\n", 10, (14, 2)),
        ("ACGTACGTAA\nACGT\nAC\n", 10, (16, 3)),
    ] {
        let summary = seqlen(body.as_bytes(), firstlen);
        assert_eq!(<(usize, usize)>::from(summary), expected, "Body: {:?}", body);
    }
}

#[test]
fn wrapped_record() -> Result<()> {
    let residues = b"MKVLAAGIVGLLLAQPAMAQEQKVTLKDLSQDPGHIWNVEGKAAVLVDMN".repeat(7);
    let mut body = Vec::new();
    for line in residues.chunks(60) {
        body.extend_from_slice(line);
        body.extend_from_slice(b"\r\n");
    }

    let config = Config::infer(&body).ok_or_else(|| eyre::eyre!("No terminated lines"))?;
    assert_eq!(config.firstlen, 61);
    validate::firstlen(config.firstlen)?;

    let summary = validate::line_lengths(&body, config)?;
    assert_eq!(summary, Summary::new(residues.len(), 0));
    assert_eq!(<[usize; 2]>::from(summary), [350, 0]);

    // Concatenated records are detected through the blank line between them
    let mut concatenated = body.clone();
    concatenated.extend_from_slice(b"\r\n");
    concatenated.extend_from_slice(&body);
    let summary = seqlen(&concatenated, config.firstlen);
    assert_eq!(summary.seqlen(), 700);
    assert_eq!(summary.errcnt(), 7);
    assert!(validate::line_lengths(&concatenated, config).is_err());

    Ok(())
}

// A body that doesn't end with LF silently drops its last line from the width checks.
#[test]
fn unterminated_trailing_line_is_not_evaluated() {
    let summary = seqlen(b"ACGTACGTAA\nACGTACGTAA\nACGTACGTAACGT", 11);
    assert_eq!(summary, Summary::new(33, 0));

    let mut validator = Validator::new(Config::new(11));
    validator.consume(b"ACGTACGTAA\nAC\nACGTACGTAACGT");
    assert!(validator.has_pending_line());
    assert_eq!(validator.finish(), Summary::new(25, 0));
}

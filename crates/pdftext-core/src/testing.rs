//! Small in-memory PDFs for tests.

use lopdf::content::{Content, Operation};
use lopdf::encryption::{decrypt_object, get_encryption_key};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

/// Build a PDF with one page per entry, each showing its text in Helvetica.
/// An empty entry produces a page with graphics but no text.
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    save(build_document(pages, "Helvetica", None))
}

/// Like [`build_pdf`], but with a non-standard font that has no `Widths`
/// array, which makes pdf-extract print diagnostics.
pub fn build_pdf_with_font(pages: &[&str], base_font: &str) -> Vec<u8> {
    save(build_document(pages, base_font, None))
}

/// Like [`build_pdf`], but page `broken` has no MediaBox anywhere in its
/// inheritance chain, so pdf-extract cannot lay it out.
pub fn build_pdf_with_broken_page(pages: &[&str], broken: usize) -> Vec<u8> {
    save(build_document(pages, "Helvetica", Some(broken)))
}

/// Build a one-page PDF protected by a user password; the empty password
/// does not open it.
pub fn build_encrypted_pdf() -> Vec<u8> {
    let mut doc = build_document(&["Secret content"], "Helvetica", None);
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "O" => Object::string_literal(vec![0x41u8; 32]),
        "U" => Object::string_literal(vec![0x42u8; 32]),
        "P" => -4,
    });
    set_encryption(&mut doc, encrypt_id);
    save(doc)
}

/// Build a PDF encrypted with RC4 that opens with the empty user password,
/// like owner-password-only files.
pub fn build_empty_password_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = build_document(pages, "Helvetica", None);
    // Without /U the key derived from the empty password is accepted.
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 4,
        "R" => 4,
        "Length" => 128,
        "O" => Object::string_literal(vec![0x41u8; 32]),
        "P" => -4,
        "CF" => dictionary! {
            "StdCF" => dictionary! {
                "CFM" => "V2",
                "Length" => 16,
            },
        },
        "StmF" => "StdCF",
        "StrF" => "StdCF",
    });
    set_encryption(&mut doc, encrypt_id);

    let key = get_encryption_key(&doc, "", false).expect("encryption key");
    // RC4 is symmetric: "decrypting" the plain streams encrypts them.
    for (&id, object) in doc.objects.iter_mut() {
        if id == encrypt_id {
            continue;
        }
        if let Ok(cipher) = decrypt_object(&key, id, object, false) {
            if let Object::Stream(stream) = object {
                stream.set_content(cipher);
            }
        }
    }

    save(doc)
}

fn set_encryption(doc: &mut Document, encrypt_id: ObjectId) {
    doc.trailer.set("Encrypt", encrypt_id);
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(vec![0x01u8; 16]),
            Object::string_literal(vec![0x01u8; 16]),
        ],
    );
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut data = Vec::new();
    doc.save_to(&mut data).expect("in-memory PDF save");
    data
}

fn build_document(pages: &[&str], base_font: &str, broken: Option<usize>) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for (index, text) in pages.iter().enumerate() {
        let operations = if text.is_empty() {
            vec![
                Operation::new("re", vec![10.into(), 10.into(), 100.into(), 100.into()]),
                Operation::new("f", vec![]),
            ]
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content stream encode"),
        ));

        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        };
        if broken != Some(index) {
            page.set("MediaBox", vec![0.into(), 0.into(), 612.into(), 792.into()]);
        }
        kids.push(doc.add_object(page).into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

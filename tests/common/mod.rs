//! Shared test fixtures: minimal PDFs generated with lopdf.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

/// Builds a PDF with one line of text per page.
///
/// Returns the document, the page object ids (in page order) and the catalog
/// object id so callers can attach an outline.
fn build_document(page_texts: &[&str]) -> (Document, Vec<ObjectId>, ObjectId) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    let mut page_ids = Vec::new();
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 750.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
        page_ids.push(page_id);
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    (doc, page_ids, catalog_id)
}

/// Saves a PDF without an embedded outline, one text line per page.
pub fn save_pdf_with_pages(path: &Path, page_texts: &[&str]) {
    let (mut doc, _, _) = build_document(page_texts);
    doc.save(path).expect("save fixture pdf");
}

/// Saves a two-page PDF with an embedded outline:
///
/// ```text
/// Introduction  -> page 1   (direct Dest array)
///   Basics      -> page 1   (direct Dest array)
/// Methods       -> page 2   (GoTo action)
/// ```
pub fn save_pdf_with_outline(path: &Path) {
    let (mut doc, page_ids, catalog_id) = build_document(&["first page", "second page"]);

    let outlines_id = doc.new_object_id();
    let intro_id = doc.new_object_id();
    let basics_id = doc.new_object_id();
    let methods_id = doc.new_object_id();

    doc.objects.insert(
        intro_id,
        Object::Dictionary(dictionary! {
            "Title" => Object::string_literal("Introduction"),
            "Parent" => outlines_id,
            "First" => basics_id,
            "Last" => basics_id,
            "Count" => 1,
            "Next" => methods_id,
            "Dest" => vec![page_ids[0].into(), "XYZ".into(), Object::Null, Object::Null, Object::Null],
        }),
    );
    doc.objects.insert(
        basics_id,
        Object::Dictionary(dictionary! {
            "Title" => Object::string_literal("Basics"),
            "Parent" => intro_id,
            "Dest" => vec![page_ids[0].into(), "Fit".into()],
        }),
    );
    doc.objects.insert(
        methods_id,
        Object::Dictionary(dictionary! {
            "Title" => Object::string_literal("Methods"),
            "Parent" => outlines_id,
            "Prev" => intro_id,
            "A" => dictionary! {
                "S" => "GoTo",
                "D" => vec![page_ids[1].into(), "Fit".into()],
            },
        }),
    );
    doc.objects.insert(
        outlines_id,
        Object::Dictionary(dictionary! {
            "Type" => "Outlines",
            "First" => intro_id,
            "Last" => methods_id,
            "Count" => 3,
        }),
    );

    match doc.get_object_mut(catalog_id) {
        Ok(Object::Dictionary(catalog)) => catalog.set("Outlines", outlines_id),
        _ => panic!("catalog object missing"),
    }

    doc.save(path).expect("save fixture pdf");
}

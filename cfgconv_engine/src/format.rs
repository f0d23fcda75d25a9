use cfgconv_ir::{ConfigTree, DialectId, FlatRecord, split_lines};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::TreeFormat;
use crate::error::ConvertError;

/// Serialize a tree in the requested format.
pub fn serialize_tree(tree: &ConfigTree, format: TreeFormat) -> Result<String, ConvertError> {
    match format {
        TreeFormat::Xml => tree_to_xml(tree),
        TreeFormat::Json => Ok(serde_json::to_string_pretty(tree)?),
    }
}

/// Serialize the untransformed line list as pretty JSON.
pub fn flat_record(input: &str, dialect: DialectId) -> Result<String, ConvertError> {
    let record = FlatRecord::from_lines(dialect, &split_lines(input));
    Ok(serde_json::to_string_pretty(&record)?)
}

/// Render a tree as an indented XML document rooted at `<dialect>_configuration`.
///
/// Absent values produce no element at all; the `interfaces` collection is
/// always present and written as an empty element when it has no entries.
pub fn tree_to_xml(tree: &ConfigTree) -> Result<String, ConvertError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_tree(&mut writer, tree)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_tree(writer: &mut Writer<Vec<u8>>, tree: &ConfigTree) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let root = tree.dialect.root_tag();
    writer.write_event(Event::Start(BytesStart::new(root.as_str())))?;

    if let Some(system) = &tree.system {
        writer.write_event(Event::Start(BytesStart::new("system")))?;
        write_leaf(writer, system.tag(), system.value())?;
        writer.write_event(Event::End(BytesEnd::new("system")))?;
    }

    if tree.interfaces.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("interfaces")))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new("interfaces")))?;
        for entry in &tree.interfaces {
            writer.write_event(Event::Start(BytesStart::new("interface")))?;
            write_leaf(writer, "name", &entry.name)?;
            write_optional(writer, "unit", entry.unit.as_deref())?;
            write_optional(writer, "ip_address", entry.ip_address.as_deref())?;
            write_optional(writer, "subnet_mask", entry.subnet_mask.as_deref())?;
            writer.write_event(Event::End(BytesEnd::new("interface")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("interfaces")))?;
    }

    if let Some(addresses) = &tree.addresses {
        if addresses.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new("addresses")))?;
        } else {
            writer.write_event(Event::Start(BytesStart::new("addresses")))?;
            for address in addresses {
                write_leaf(writer, "address", address)?;
            }
            writer.write_event(Event::End(BytesEnd::new("addresses")))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new(root.as_str())))?;
    Ok(())
}

fn write_leaf(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn write_optional(
    writer: &mut Writer<Vec<u8>>,
    tag: &str,
    text: Option<&str>,
) -> Result<(), quick_xml::Error> {
    match text {
        Some(text) => write_leaf(writer, tag, text),
        None => Ok(()),
    }
}

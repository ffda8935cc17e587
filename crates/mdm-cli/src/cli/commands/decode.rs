//! Decode command: print the fields of a file id.

use anyhow::{Context, Result};
use mdm_core::file_id::{self, FileLocation};

/// Decode the file id and print its variant fields.
pub async fn run_decode(file_id: &str) -> Result<()> {
    let data = file_id::decode(file_id).context("decoding file id")?;

    println!("media_type: {:?} (tag {})", data.media_type, data.media_type.tag());
    println!("category:   {}", data.media_type.category());
    match data.location {
        FileLocation::PeerPhoto {
            dc_id,
            peer_id,
            volume_id,
            local_id,
            is_big,
        } => {
            println!("variant:    peer photo");
            println!("dc_id:      {}", dc_id);
            println!("peer_id:    {}", peer_id);
            println!("volume_id:  {}", volume_id);
            println!("local_id:   {}", local_id);
            println!("is_big:     {}", is_big);
        }
        FileLocation::PhotoThumb {
            dc_id,
            document_id,
            access_hash,
            thumb_size,
        } => {
            println!("variant:     photo/thumbnail");
            println!("dc_id:       {}", dc_id);
            println!("document_id: {}", document_id);
            println!("access_hash: {}", access_hash);
            println!("thumb_size:  {}", thumb_size);
        }
        FileLocation::Document {
            dc_id,
            document_id,
            access_hash,
        } => {
            println!("variant:     document");
            println!("dc_id:       {}", dc_id);
            println!("document_id: {}", document_id);
            println!("access_hash: {}", access_hash);
        }
    }

    Ok(())
}

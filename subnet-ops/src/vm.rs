use std::io::{self, Error, ErrorKind};

use avalanche_types::ids;

/// VM IDs are 32 bytes.
pub const ID_LEN: usize = 32;

/// Derives the VM ID from its name.
/// The name bytes are right-padded with zeros to 32 bytes,
/// same as "ids.ToID" on the padded name in avalanchego.
pub fn id_from_name(name: &str) -> io::Result<ids::Id> {
    let n = name.len();
    if n == 0 {
        return Err(Error::new(ErrorKind::InvalidInput, "empty VM name"));
    }
    if n > ID_LEN {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("can't id {} bytes (>{})", n, ID_LEN),
        ));
    }

    let mut d = name.as_bytes().to_vec();
    d.resize(ID_LEN, 0);
    Ok(ids::Id::from_slice(&d))
}

/// RUST_LOG=debug cargo test --package subnet-ops --lib -- vm::test_id_from_name --exact --show-output
#[test]
fn test_id_from_name() {
    let _ = env_logger::builder().is_test(true).try_init();

    let subnet_evm_id = id_from_name("subnetevm").unwrap();
    assert_eq!(
        subnet_evm_id.to_string(),
        "srEXiWaHuhNyGwPUi444Tu47ZEDwxTWrbQiuD7FmgSAQ6X7Dy"
    );

    let contents = random_manager::secure_string(30);
    let id = id_from_name(&contents).unwrap();
    log::info!("id_from_name: {}", id);

    assert!(id_from_name("").is_err());
    assert!(id_from_name(&"a".repeat(33)).is_err());
}

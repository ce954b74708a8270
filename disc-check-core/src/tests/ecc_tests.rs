use super::*;

// -- Test helpers --

/// Compute the parity bytes the verifier expects for one plane, walking
/// the virtual buffer exactly the way `check_plane` does.
fn encode_plane(
    tables: &EccTables,
    address: &[u8; 4],
    data: &[u8],
    major_count: usize,
    minor_count: usize,
    major_stride: usize,
    minor_stride: usize,
) -> Vec<u8> {
    let size = major_count * minor_count;
    let mut parity = vec![0u8; major_count * 2];
    for major in 0..major_count {
        let mut index = (major >> 1) * major_stride + (major & 1);
        let mut ecc_a = 0u8;
        let mut ecc_b = 0u8;
        for _ in 0..minor_count {
            let byte = if index < 4 {
                address[index]
            } else {
                data[index - 4]
            };
            index += minor_stride;
            if index >= size {
                index -= size;
            }
            ecc_a ^= byte;
            ecc_b ^= byte;
            ecc_a = tables.forward[ecc_a as usize];
        }
        let stored = tables.backward[(tables.forward[ecc_a as usize] ^ ecc_b) as usize];
        parity[major] = stored;
        parity[major + major_count] = stored ^ ecc_b;
    }
    parity
}

/// Build a data region (2060 payload bytes + 172 P-parity bytes the Q
/// plane sweeps) and its matching 276-byte ECC block.
fn encode_sector_ecc(tables: &EccTables, address: &[u8; 4]) -> (Vec<u8>, Vec<u8>) {
    let mut data = vec![0u8; 2232];
    for (i, byte) in data[..2060].iter_mut().enumerate() {
        *byte = (i % 251) as u8;
    }

    let mut ecc = vec![0u8; ECC_SIZE];
    let p = encode_plane(tables, address, &data, 86, 24, 2, 86);
    data[2060..].copy_from_slice(&p);
    ecc[..172].copy_from_slice(&p);
    let q = encode_plane(tables, address, &data, 52, 43, 86, 88);
    ecc[172..].copy_from_slice(&q);

    (data, ecc)
}

// -- Tests --

#[test]
fn all_zero_region_has_all_zero_parity() {
    let tables = EccTables::new();
    let data = vec![0u8; 2232];
    let ecc = vec![0u8; ECC_SIZE];
    assert!(check_sector_ecc(&tables, &ZERO_ADDRESS, &data, &ecc));
}

#[test]
fn encoded_sector_verifies() {
    let tables = EccTables::new();
    let address = [0x00, 0x02, 0x16, 0x01];
    let (data, ecc) = encode_sector_ecc(&tables, &address);
    assert!(check_sector_ecc(&tables, &address, &data, &ecc));
}

#[test]
fn corrupted_data_byte_fails() {
    let tables = EccTables::new();
    let address = [0x00, 0x02, 0x16, 0x01];
    let (mut data, ecc) = encode_sector_ecc(&tables, &address);
    data[5] ^= 0x40;
    assert!(!check_sector_ecc(&tables, &address, &data, &ecc));
}

#[test]
fn corrupted_parity_byte_fails() {
    let tables = EccTables::new();
    let address = [0x00, 0x02, 0x16, 0x01];
    let (data, mut ecc) = encode_sector_ecc(&tables, &address);
    ecc[200] ^= 0x01;
    assert!(!check_sector_ecc(&tables, &address, &data, &ecc));
}

#[test]
fn address_participates_in_parity() {
    let tables = EccTables::new();
    let address = [0x00, 0x02, 0x16, 0x01];
    let (data, ecc) = encode_sector_ecc(&tables, &address);
    let other = [0x00, 0x02, 0x17, 0x01];
    assert!(!check_sector_ecc(&tables, &other, &data, &ecc));
}

#[test]
fn single_plane_mismatch_fails_the_sector() {
    let tables = EccTables::new();
    let address = [0x00, 0x02, 0x16, 0x01];
    let (data, mut ecc) = encode_sector_ecc(&tables, &address);
    // P plane intact, Q plane corrupted.
    assert!(check_plane(&tables, &address, &data, 86, 24, 2, 86, &ecc[..172]));
    ecc[172] ^= 0x80;
    assert!(!check_sector_ecc(&tables, &address, &data, &ecc));
}

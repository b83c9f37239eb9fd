use crate::error::Layer4Error;

/// Smallest legal IPv4 header length, in 32-bit words.
const MIN_IHL: u8 = 5;

/// Byte offset of the layer-4 header in an IPv4 packet.
///
/// The offset is the header-length nibble of the first byte times four.
///
/// # Errors
///
/// The packet is empty, its header length is below 20 bytes, or the header
/// runs past the end of the packet.
pub fn layer4_offset(ip_packet: &[u8]) -> Result<usize, Layer4Error> {
    let first = *ip_packet.first().ok_or(Layer4Error::Empty)?;
    let ihl = first & 0x0f;
    if ihl < MIN_IHL {
        return Err(Layer4Error::HeaderTooShort { ihl });
    }

    let header_len = usize::from(ihl) * 4;
    if header_len > ip_packet.len() {
        return Err(Layer4Error::Truncated {
            header_len,
            packet_len: ip_packet.len(),
        });
    }
    Ok(header_len)
}

/// The bytes following the IPv4 header.
///
/// ```rust
/// let mut packet = [0u8; 28];
/// packet[0] = 0x45;
/// packet[20] = 0x04; // UDP source port, high byte
/// let udp = pktutil::layer4(&packet).unwrap();
/// assert_eq!(udp.len(), 8);
/// assert_eq!(udp[0], 0x04);
/// ```
///
/// # Errors
///
/// See [`layer4_offset`].
pub fn layer4(ip_packet: &[u8]) -> Result<&[u8], Layer4Error> {
    let offset = layer4_offset(ip_packet)?;
    Ok(&ip_packet[offset..])
}

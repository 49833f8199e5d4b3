mod document;
mod envelope;
mod error;
pub(crate) mod lenient;
mod packet_loss;
mod view;


use tracing::debug;

use crate::model::ResultSet;

pub use envelope::SUCCESS_STATUS;
pub use error::{NormalizeError, Result};
pub use packet_loss::normalize_packet_loss;
pub use view::{ViewShape, decode_single, decode_stepped, decode_view};

/// Decodes a raw `jsonResult.php` response into a [`ResultSet`].
///
/// Either the whole document decodes or an error is returned; there is no partial result.
pub fn decode(raw: &[u8]) -> Result<ResultSet> {
    let data = envelope::open(raw)?;
    let result = document::decode_result_data(data)?;
    debug!(
        test_id = %result.id,
        runs = result.run_count(),
        packet_loss_rate = result.connectivity.packet_loss_rate,
        "decoded result set"
    );
    Ok(result)
}

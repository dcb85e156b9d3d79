//! Printed field values for a GR.

use chrono::NaiveDate;

use super::dates::{header_date, optional_date};
use crate::fallback::{
    first_present, DASH, NOT_ASSIGNED, NOT_AVAILABLE, NOT_SPECIFIED, SELF_CONSIGNOR,
    ZERO_QUANTITY,
};
use crate::model::{ContainerDetail, TransportRequest, TransporterDetail};

/// Every value printed on a GR, already resolved to its final text.
///
/// Values are not yet fitted to their cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrFields {
    pub gr_number: String,
    pub date: String,
    pub consignor: String,
    pub consignee: String,
    pub from: String,
    pub to: String,
    pub delivery_address: String,
    pub gstin: String,
    pub reference_number: String,
    pub vehicle_number: String,
    pub driver_name: String,
    pub driver_contact: String,
    pub container_number: String,
    pub shipping_line: String,
    pub seal_number: String,
    pub container_size: String,
    pub weight: String,
    pub vehicle_size: String,
    pub goods: String,
    pub port: String,
    pub factory_reporting: String,
    pub factory_release: String,
    pub job_number: String,
    pub request_id: String,
    pub no_of_containers: String,
    pub transporter: String,
    pub remarks: String,
}

impl GrFields {
    /// Resolve every field from the request, then the first transporter and
    /// its first container, then the literal placeholder.
    pub fn resolve(
        request: &TransportRequest,
        details: Option<&[TransporterDetail]>,
        today: NaiveDate,
    ) -> Self {
        let r = request;
        let transporter: Option<&TransporterDetail> = details.and_then(|d| d.first());
        let container: Option<&ContainerDetail> = transporter.and_then(|t| t.containers.first());

        let total_containers: usize = details
            .map(|d| d.iter().map(|t| t.containers.len()).sum())
            .unwrap_or(0);
        let counted = (total_containers > 0).then(|| total_containers.to_string());

        let fields = Self {
            gr_number: first_present(
                [r.gr_number.as_deref(), r.formatted_request_id.as_deref(), r.id.as_deref()],
                DASH,
            ),
            date: header_date(r.created_at.as_deref(), today),
            consignor: first_present([r.consigner.as_deref()], SELF_CONSIGNOR),
            consignee: first_present([r.consignee.as_deref()], NOT_SPECIFIED),
            from: first_present([r.pickup_location.as_deref()], NOT_SPECIFIED),
            to: first_present([r.delivery_location.as_deref()], NOT_SPECIFIED),
            delivery_address: first_present([r.delivery_location.as_deref()], NOT_SPECIFIED),
            gstin: first_present([r.gstin.as_deref()], NOT_AVAILABLE),
            reference_number: first_present(
                [r.reference_number.as_deref(), r.booking_number.as_deref()],
                DASH,
            ),
            vehicle_number: first_present(
                [r.vehicle_number.as_deref(), field(transporter, |t| &t.vehicle_no)],
                NOT_ASSIGNED,
            ),
            driver_name: first_present(
                [r.driver_name.as_deref(), field(transporter, |t| &t.driver_name)],
                NOT_AVAILABLE,
            ),
            driver_contact: first_present(
                [r.driver_contact.as_deref(), field(transporter, |t| &t.driver_contact)],
                NOT_AVAILABLE,
            ),
            container_number: first_present(
                [
                    r.container_number.as_deref(),
                    field(container, |c| &c.container_no),
                    field(transporter, |t| &t.container_no),
                ],
                NOT_AVAILABLE,
            ),
            shipping_line: first_present(
                [
                    r.shipping_line.as_deref(),
                    field(container, |c| &c.line),
                    field(transporter, |t| &t.line),
                ],
                NOT_AVAILABLE,
            ),
            seal_number: first_present(
                [
                    r.seal_number.as_deref(),
                    field(container, |c| &c.seal_no),
                    field(transporter, |t| &t.seal_no),
                ],
                NOT_AVAILABLE,
            ),
            container_size: first_present(
                [r.container_size.as_deref(), field(container, |c| &c.size)],
                NOT_SPECIFIED,
            ),
            weight: first_present(
                [r.cargo_weight.as_deref(), field(container, |c| &c.weight)],
                ZERO_QUANTITY,
            ),
            vehicle_size: first_present([r.vehicle_size.as_deref()], NOT_SPECIFIED),
            goods: first_present([r.commodity.as_deref()], NOT_SPECIFIED),
            port: first_present([r.port.as_deref()], NOT_SPECIFIED),
            factory_reporting: optional_date(r.factory_reporting_date.as_deref()),
            factory_release: optional_date(r.factory_release_date.as_deref()),
            job_number: first_present([r.job_number.as_deref()], DASH),
            request_id: first_present(
                [r.formatted_request_id.as_deref(), r.id.as_deref()],
                DASH,
            ),
            no_of_containers: first_present(
                [r.no_of_containers.as_deref(), counted.as_deref()],
                ZERO_QUANTITY,
            ),
            transporter: first_present(
                [r.transporter_name.as_deref(), field(transporter, |t| &t.transporter_name)],
                NOT_AVAILABLE,
            ),
            remarks: first_present([r.remarks.as_deref()], DASH),
        };

        log::debug!(
            "Resolved GR {} ({} transporter(s), {} container(s))",
            fields.gr_number,
            details.map_or(0, <[TransporterDetail]>::len),
            total_containers
        );
        fields
    }

    /// All values, for checks that apply to every printed field.
    pub fn values(&self) -> [&str; 27] {
        [
            &self.gr_number,
            &self.date,
            &self.consignor,
            &self.consignee,
            &self.from,
            &self.to,
            &self.delivery_address,
            &self.gstin,
            &self.reference_number,
            &self.vehicle_number,
            &self.driver_name,
            &self.driver_contact,
            &self.container_number,
            &self.shipping_line,
            &self.seal_number,
            &self.container_size,
            &self.weight,
            &self.vehicle_size,
            &self.goods,
            &self.port,
            &self.factory_reporting,
            &self.factory_release,
            &self.job_number,
            &self.request_id,
            &self.no_of_containers,
            &self.transporter,
            &self.remarks,
        ]
    }
}

fn field<'a, T>(source: Option<&'a T>, get: fn(&T) -> &Option<String>) -> Option<&'a str> {
    source.and_then(|s| get(s).as_deref())
}

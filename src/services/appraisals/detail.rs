use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AppraisalService;
use crate::models::{
    ApiResponse, ErrorCode,
    appraisals::{
        entities::{Appraisal, GradeBand, ScoreEntry},
        responses::{AppraisalDetailResponse, CriterionMean, EmployeeSummary, ScoreEntryDetail},
    },
    criteria::entities::Criterion,
    employees::entities::Employee,
};
use crate::services::rankings::smart::{CriteriaCatalog, aggregate};

/// Joins the stored entries with the current catalog. Entries whose
/// sub-criterion no longer exists are kept with empty catalog fields.
pub(crate) fn build_detail(
    appraisal: Appraisal,
    entries: Vec<ScoreEntry>,
    employee: &Employee,
    catalog: &[Criterion],
) -> AppraisalDetailResponse {
    let by_sub: HashMap<i64, (&Criterion, &str)> = catalog
        .iter()
        .flat_map(|c| c.sub_criteria.iter().map(move |s| (s.id, (c, s.name.as_str()))))
        .collect();

    let criterion_means = match CriteriaCatalog::new(catalog) {
        Ok(smart_catalog) => {
            let means = aggregate(&smart_catalog, &entries);
            catalog
                .iter()
                .filter_map(|c| {
                    let value = means.get(&c.id).copied().flatten()?;
                    Some(CriterionMean {
                        criterion_id: c.id,
                        name: c.name.clone(),
                        direction: c.direction,
                        weight: c.weight,
                        value,
                    })
                })
                .collect()
        }
        Err(_) => Vec::new(),
    };

    let entries = entries
        .into_iter()
        .map(|entry| {
            let known = by_sub.get(&entry.sub_criterion_id);
            ScoreEntryDetail {
                sub_criterion_id: entry.sub_criterion_id,
                sub_criterion_name: known.map(|(_, name)| name.to_string()),
                criterion_id: known.map(|(c, _)| c.id),
                criterion_name: known.map(|(c, _)| c.name.clone()),
                direction: known.map(|(c, _)| c.direction),
                value: entry.value,
            }
        })
        .collect();

    AppraisalDetailResponse {
        grade: appraisal.final_score.map(GradeBand::from_score),
        appraisal,
        employee: EmployeeSummary::from(employee),
        entries,
        criterion_means,
    }
}

pub async fn get_appraisal(
    service: &AppraisalService,
    appraisal_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (appraisal, entries) = match storage.get_appraisal_by_id(appraisal_id).await {
        Ok(Some(found)) => found,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AppraisalNotFound,
                "Appraisal not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve appraisal: {e}"),
                )),
            );
        }
    };

    let employee = match storage.get_employee_by_id(appraisal.employee_id).await {
        Ok(Some(employee)) => employee,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EmployeeNotFound,
                "Employee not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve employee: {e}"),
                )),
            );
        }
    };

    match storage.list_criteria_by_division(employee.division).await {
        Ok(catalog) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            build_detail(appraisal, entries, &employee, &catalog),
            "Appraisal retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve criteria: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::criteria::entities::{CriterionDirection, SubCriterion};
    use crate::models::{Division, Period};

    #[test]
    fn test_detail_marks_deleted_sub_criteria_unknown() {
        let now = chrono::Utc::now();
        let catalog = vec![Criterion {
            id: 1,
            division: Division::Admin,
            name: "Accuracy".into(),
            weight: 10.0,
            direction: CriterionDirection::Benefit,
            sub_criteria: vec![
                SubCriterion {
                    id: 10,
                    criterion_id: 1,
                    name: "Filing".into(),
                },
                SubCriterion {
                    id: 11,
                    criterion_id: 1,
                    name: "Reports".into(),
                },
            ],
            created_at: now,
            updated_at: now,
        }];
        let employee = Employee {
            id: 7,
            division: Division::Admin,
            personnel_number: "K-7".into(),
            name: "Rina".into(),
            active: true,
            created_at: now,
            updated_at: now,
        };
        let appraisal = Appraisal {
            id: 3,
            employee_id: 7,
            period: Period { month: 2, year: 2026 },
            final_score: Some(88.0),
            created_by: "hrd".into(),
            created_at: now,
        };
        let entries = [(10, 4.0), (11, 5.0), (99, 1.0)]
            .iter()
            .enumerate()
            .map(|(i, (sub, value))| ScoreEntry {
                id: i as i64,
                appraisal_id: 3,
                sub_criterion_id: *sub,
                value: *value,
            })
            .collect();

        let detail = build_detail(appraisal, entries, &employee, &catalog);
        assert_eq!(detail.grade, Some(GradeBand::A));
        assert_eq!(detail.criterion_means.len(), 1);
        assert_eq!(detail.criterion_means[0].value, 4.5);
        assert_eq!(detail.entries[0].criterion_name.as_deref(), Some("Accuracy"));
        assert!(detail.entries[2].sub_criterion_name.is_none());
        assert!(detail.entries[2].criterion_id.is_none());
    }
}

use std::cmp::Ordering;
use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AppraisalService;
use crate::models::{
    ApiResponse, Division, ErrorCode, Period,
    appraisals::{
        entities::{Appraisal, GradeBand},
        requests::AppraisalListParams,
        responses::{AppraisalListItem, AppraisalListResponse, AppraisalSummary, EmployeeSummary},
    },
    employees::entities::Employee,
};

/// Ranking table: grouped by division, highest final score first, unscored
/// rows last, ties by name. Ranks restart per division and equal scores share
/// a rank. Only scored rows get a rank and a grade.
pub(crate) fn build_ranked_list(mut rows: Vec<(Appraisal, Employee)>) -> AppraisalListResponse {
    rows.sort_by(|(a, ea), (b, eb)| {
        let by_score = match (a.final_score, b.final_score) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        ea.division
            .cmp(&eb.division)
            .then(by_score)
            .then_with(|| ea.name.cmp(&eb.name))
            .then_with(|| a.id.cmp(&b.id))
    });

    let total = rows.len();
    let scores: Vec<f64> = rows
        .iter()
        .map(|(a, _)| a.final_score.unwrap_or(0.0))
        .collect();
    let average = if total == 0 {
        0.0
    } else {
        scores.iter().sum::<f64>() / total as f64
    };
    let max = scores.iter().copied().fold(0.0, f64::max);

    // division -> (rows ranked so far, last score, its rank)
    let mut standings: HashMap<Division, (i64, f64, i64)> = HashMap::new();
    let items = rows
        .into_iter()
        .map(|(appraisal, employee)| {
            let rank = appraisal.final_score.map(|score| {
                let standing = standings
                    .entry(employee.division)
                    .or_insert((0, f64::NAN, 0));
                standing.0 += 1;
                if score != standing.1 {
                    standing.1 = score;
                    standing.2 = standing.0;
                }
                standing.2
            });
            AppraisalListItem {
                id: appraisal.id,
                employee: EmployeeSummary::from(&employee),
                period: appraisal.period,
                final_score: appraisal.final_score,
                rank,
                grade: appraisal.final_score.map(GradeBand::from_score),
            }
        })
        .collect();

    AppraisalListResponse {
        items,
        summary: AppraisalSummary {
            total: total as i64,
            average,
            max,
        },
    }
}

pub async fn list_appraisals(
    service: &AppraisalService,
    query: AppraisalListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let period = match Period::new(query.month, query.year) {
        Ok(period) => period,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, e.message())));
        }
    };

    let storage = service.get_storage(request);

    match storage.list_appraisals(query.division, period).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            build_ranked_list(rows),
            "Appraisals retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve appraisals: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str, score: Option<f64>) -> (Appraisal, Employee) {
        division_row(id, name, Division::Marketing, score)
    }

    fn division_row(
        id: i64,
        name: &str,
        division: Division,
        score: Option<f64>,
    ) -> (Appraisal, Employee) {
        let now = chrono::Utc::now();
        (
            Appraisal {
                id,
                employee_id: id,
                period: Period { month: 0, year: 2026 },
                final_score: score,
                created_by: "hrd".into(),
                created_at: now,
            },
            Employee {
                id,
                division,
                personnel_number: format!("K-{id}"),
                name: name.into(),
                active: true,
                created_at: now,
                updated_at: now,
            },
        )
    }

    #[test]
    fn test_ranked_order_grades_and_summary() {
        let list = build_ranked_list(vec![
            row(1, "Citra", None),
            row(2, "Budi", Some(72.0)),
            row(3, "Ayu", Some(90.0)),
            row(4, "Agus", None),
            row(5, "Dewi", Some(40.0)),
        ]);

        let names: Vec<&str> = list.items.iter().map(|i| i.employee.name.as_str()).collect();
        assert_eq!(names, ["Ayu", "Budi", "Dewi", "Agus", "Citra"]);

        let ranks: Vec<Option<i64>> = list.items.iter().map(|i| i.rank).collect();
        assert_eq!(ranks, [Some(1), Some(2), Some(3), None, None]);
        assert_eq!(list.items[0].grade, Some(GradeBand::A));
        assert_eq!(list.items[1].grade, Some(GradeBand::B));
        assert_eq!(list.items[2].grade, Some(GradeBand::D));
        assert_eq!(list.items[3].grade, None);

        assert_eq!(list.summary.total, 5);
        assert!((list.summary.average - 40.4).abs() < 1e-9);
        assert_eq!(list.summary.max, 90.0);
    }

    #[test]
    fn test_empty_list() {
        let list = build_ranked_list(Vec::new());
        assert!(list.items.is_empty());
        assert_eq!(list.summary.total, 0);
        assert_eq!(list.summary.average, 0.0);
        assert_eq!(list.summary.max, 0.0);
    }

    #[test]
    fn test_ranks_restart_per_division() {
        let list = build_ranked_list(vec![
            division_row(1, "Eka", Division::Marketing, Some(100.0)),
            division_row(2, "Fajar", Division::Admin, Some(100.0)),
            division_row(3, "Gita", Division::Marketing, Some(0.0)),
            division_row(4, "Hadi", Division::Admin, Some(35.0)),
        ]);

        let rows: Vec<(&str, Option<i64>)> = list
            .items
            .iter()
            .map(|i| (i.employee.name.as_str(), i.rank))
            .collect();
        assert_eq!(
            rows,
            [
                ("Eka", Some(1)),
                ("Gita", Some(2)),
                ("Fajar", Some(1)),
                ("Hadi", Some(2)),
            ]
        );
    }

    #[test]
    fn test_equal_scores_share_a_rank() {
        let list = build_ranked_list(vec![
            row(1, "Ayu", Some(80.0)),
            row(2, "Budi", Some(80.0)),
            row(3, "Citra", Some(50.0)),
            row(4, "Dewi", None),
        ]);

        let ranks: Vec<Option<i64>> = list.items.iter().map(|i| i.rank).collect();
        assert_eq!(ranks, [Some(1), Some(1), Some(3), None]);
    }
}

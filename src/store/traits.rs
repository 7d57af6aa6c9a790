use crate::model::{
    ActivityLog, ArticulationAgreement, Course, CourseUpdate, Deadline, DeadlineUpdate, Document,
    EducationPlan, EducationPlanUpdate, Id, Institution, NewActivityLog, NewArticulationAgreement,
    NewCourse, NewDeadline, NewDocument, NewEducationPlan, NewPlannedSemester, NewTargetSchool,
    NewUser, PlannedSemester, PlannedSemesterUpdate, TargetSchool, User, UserProfileUpdate,
};
use anyhow::Result;

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, id: &Id) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    /// Insert a user under a caller-chosen id (the demo account has a fixed one).
    async fn create_user_with_id(&self, id: Id, user: NewUser) -> Result<User>;
    async fn update_user(&self, id: &Id, updates: UserProfileUpdate) -> Result<Option<User>>;
}

#[async_trait::async_trait]
pub trait InstitutionStore: Send + Sync {
    async fn get_institutions(&self) -> Result<Vec<Institution>>;
    async fn get_institution(&self, id: &Id) -> Result<Option<Institution>>;
    async fn create_institution(&self, institution: Institution) -> Result<Institution>;
}

#[async_trait::async_trait]
pub trait CourseStore: Send + Sync {
    async fn get_courses_by_user(&self, user_id: &Id) -> Result<Vec<Course>>;
    async fn get_course(&self, id: &Id) -> Result<Option<Course>>;
    async fn create_course(&self, user_id: &Id, course: NewCourse) -> Result<Course>;
    async fn update_course(&self, id: &Id, updates: CourseUpdate) -> Result<Option<Course>>;
    async fn delete_course(&self, id: &Id) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait EducationPlanStore: Send + Sync {
    async fn get_plans_by_user(&self, user_id: &Id) -> Result<Vec<EducationPlan>>;
    async fn get_plan(&self, id: &Id) -> Result<Option<EducationPlan>>;
    async fn create_plan(&self, user_id: &Id, plan: NewEducationPlan) -> Result<EducationPlan>;
    async fn update_plan(
        &self,
        id: &Id,
        updates: EducationPlanUpdate,
    ) -> Result<Option<EducationPlan>>;
    async fn delete_plan(&self, id: &Id) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait PlannedSemesterStore: Send + Sync {
    async fn get_semesters_by_plan(&self, plan_id: &Id) -> Result<Vec<PlannedSemester>>;
    async fn create_semester(&self, semester: NewPlannedSemester) -> Result<PlannedSemester>;
    async fn update_semester(
        &self,
        id: &Id,
        updates: PlannedSemesterUpdate,
    ) -> Result<Option<PlannedSemester>>;
    async fn delete_semester(&self, id: &Id) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_documents_by_user(&self, user_id: &Id) -> Result<Vec<Document>>;
    async fn get_document(&self, id: &Id) -> Result<Option<Document>>;
    async fn create_document(&self, user_id: &Id, document: NewDocument) -> Result<Document>;
    async fn delete_document(&self, id: &Id) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait AgreementStore: Send + Sync {
    async fn get_agreements_by_user(&self, user_id: &Id) -> Result<Vec<ArticulationAgreement>>;
    async fn create_agreement(
        &self,
        user_id: &Id,
        agreement: NewArticulationAgreement,
    ) -> Result<ArticulationAgreement>;
}

#[async_trait::async_trait]
pub trait DeadlineStore: Send + Sync {
    async fn get_deadlines_by_user(&self, user_id: &Id) -> Result<Vec<Deadline>>;
    async fn create_deadline(&self, user_id: &Id, deadline: NewDeadline) -> Result<Deadline>;
    async fn update_deadline(&self, id: &Id, updates: DeadlineUpdate) -> Result<Option<Deadline>>;
}

#[async_trait::async_trait]
pub trait ActivityStore: Send + Sync {
    /// List a user's audit entries, newest first.
    async fn get_activity_by_user(&self, user_id: &Id) -> Result<Vec<ActivityLog>>;
    async fn create_activity(&self, user_id: &Id, activity: NewActivityLog) -> Result<ActivityLog>;
}

#[async_trait::async_trait]
pub trait TargetSchoolStore: Send + Sync {
    async fn get_target_schools_by_user(&self, user_id: &Id) -> Result<Vec<TargetSchool>>;
    async fn create_target_school(
        &self,
        user_id: &Id,
        target: NewTargetSchool,
    ) -> Result<TargetSchool>;
    async fn delete_target_school(&self, id: &Id) -> Result<bool>;
}

pub trait Store:
    UserStore
    + InstitutionStore
    + CourseStore
    + EducationPlanStore
    + PlannedSemesterStore
    + DocumentStore
    + AgreementStore
    + DeadlineStore
    + ActivityStore
    + TargetSchoolStore
    + Send
    + Sync
{
}

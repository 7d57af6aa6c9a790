use crate::model::{
    ActivityLog, ArticulationAgreement, Course, CourseUpdate, Deadline, DeadlineUpdate, Document,
    EducationPlan, EducationPlanUpdate, Id, Institution, NewActivityLog, NewArticulationAgreement,
    NewCourse, NewDeadline, NewDocument, NewEducationPlan, NewPlannedSemester, NewTargetSchool,
    NewUser, PlannedSemester, PlannedSemesterUpdate, TargetSchool, User, UserProfileUpdate,
};
use crate::store::traits::{
    ActivityStore, AgreementStore, CourseStore, DeadlineStore, DocumentStore, EducationPlanStore,
    InstitutionStore, PlannedSemesterStore, Store, TargetSchoolStore, UserStore,
};
use anyhow::Result;
use itertools::Itertools;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory store: one map per entity type, keyed by generated id. All state
/// is lost on process restart. Locks are never held across an await.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Id, User>>,
    institutions: RwLock<HashMap<Id, Institution>>,
    courses: RwLock<HashMap<Id, Course>>,
    plans: RwLock<HashMap<Id, EducationPlan>>,
    semesters: RwLock<HashMap<Id, PlannedSemester>>,
    documents: RwLock<HashMap<Id, Document>>,
    agreements: RwLock<HashMap<Id, ArticulationAgreement>>,
    deadlines: RwLock<HashMap<Id, Deadline>>,
    activity: RwLock<HashMap<Id, ActivityLog>>,
    target_schools: RwLock<HashMap<Id, TargetSchool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {}

#[async_trait::async_trait]
impl UserStore for MemoryStore {
    async fn get_user(&self, id: &Id) -> Result<Option<User>> {
        Ok(self.users.read().get(id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user_with_id(&self, id: Id, new_user: NewUser) -> Result<User> {
        let user = new_user.into_user_with_id(id);
        self.users.write().insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: &Id, updates: UserProfileUpdate) -> Result<Option<User>> {
        let mut users = self.users.write();
        Ok(users.get_mut(id).map(|user| {
            updates.apply(user);
            user.clone()
        }))
    }
}

#[async_trait::async_trait]
impl InstitutionStore for MemoryStore {
    async fn get_institutions(&self) -> Result<Vec<Institution>> {
        Ok(self.institutions.read().values().cloned().collect())
    }

    async fn get_institution(&self, id: &Id) -> Result<Option<Institution>> {
        Ok(self.institutions.read().get(id).cloned())
    }

    async fn create_institution(&self, institution: Institution) -> Result<Institution> {
        self.institutions
            .write()
            .insert(institution.id.clone(), institution.clone());
        Ok(institution)
    }
}

#[async_trait::async_trait]
impl CourseStore for MemoryStore {
    async fn get_courses_by_user(&self, user_id: &Id) -> Result<Vec<Course>> {
        Ok(self
            .courses
            .read()
            .values()
            .filter(|course| &course.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_course(&self, id: &Id) -> Result<Option<Course>> {
        Ok(self.courses.read().get(id).cloned())
    }

    async fn create_course(&self, user_id: &Id, new_course: NewCourse) -> Result<Course> {
        let course = new_course.into_course(user_id.clone());
        self.courses
            .write()
            .insert(course.id.clone(), course.clone());
        Ok(course)
    }

    async fn update_course(&self, id: &Id, updates: CourseUpdate) -> Result<Option<Course>> {
        let mut courses = self.courses.write();
        Ok(courses.get_mut(id).map(|course| {
            updates.apply(course);
            course.clone()
        }))
    }

    async fn delete_course(&self, id: &Id) -> Result<bool> {
        Ok(self.courses.write().remove(id).is_some())
    }
}

#[async_trait::async_trait]
impl EducationPlanStore for MemoryStore {
    async fn get_plans_by_user(&self, user_id: &Id) -> Result<Vec<EducationPlan>> {
        Ok(self
            .plans
            .read()
            .values()
            .filter(|plan| &plan.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_plan(&self, id: &Id) -> Result<Option<EducationPlan>> {
        Ok(self.plans.read().get(id).cloned())
    }

    async fn create_plan(&self, user_id: &Id, new_plan: NewEducationPlan) -> Result<EducationPlan> {
        let plan = new_plan.into_plan(user_id.clone());
        self.plans.write().insert(plan.id.clone(), plan.clone());
        Ok(plan)
    }

    async fn update_plan(
        &self,
        id: &Id,
        updates: EducationPlanUpdate,
    ) -> Result<Option<EducationPlan>> {
        let mut plans = self.plans.write();
        Ok(plans.get_mut(id).map(|plan| {
            updates.apply(plan);
            plan.clone()
        }))
    }

    async fn delete_plan(&self, id: &Id) -> Result<bool> {
        Ok(self.plans.write().remove(id).is_some())
    }
}

#[async_trait::async_trait]
impl PlannedSemesterStore for MemoryStore {
    async fn get_semesters_by_plan(&self, plan_id: &Id) -> Result<Vec<PlannedSemester>> {
        Ok(self
            .semesters
            .read()
            .values()
            .filter(|semester| &semester.plan_id == plan_id)
            .cloned()
            .collect())
    }

    async fn create_semester(&self, new_semester: NewPlannedSemester) -> Result<PlannedSemester> {
        let semester = new_semester.into_semester();
        self.semesters
            .write()
            .insert(semester.id.clone(), semester.clone());
        Ok(semester)
    }

    async fn update_semester(
        &self,
        id: &Id,
        updates: PlannedSemesterUpdate,
    ) -> Result<Option<PlannedSemester>> {
        let mut semesters = self.semesters.write();
        Ok(semesters.get_mut(id).map(|semester| {
            updates.apply(semester);
            semester.clone()
        }))
    }

    async fn delete_semester(&self, id: &Id) -> Result<bool> {
        Ok(self.semesters.write().remove(id).is_some())
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn get_documents_by_user(&self, user_id: &Id) -> Result<Vec<Document>> {
        Ok(self
            .documents
            .read()
            .values()
            .filter(|doc| &doc.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_document(&self, id: &Id) -> Result<Option<Document>> {
        Ok(self.documents.read().get(id).cloned())
    }

    async fn create_document(&self, user_id: &Id, new_document: NewDocument) -> Result<Document> {
        let document = new_document.into_document(user_id.clone());
        self.documents
            .write()
            .insert(document.id.clone(), document.clone());
        Ok(document)
    }

    async fn delete_document(&self, id: &Id) -> Result<bool> {
        Ok(self.documents.write().remove(id).is_some())
    }
}

#[async_trait::async_trait]
impl AgreementStore for MemoryStore {
    async fn get_agreements_by_user(&self, user_id: &Id) -> Result<Vec<ArticulationAgreement>> {
        Ok(self
            .agreements
            .read()
            .values()
            .filter(|agreement| &agreement.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_agreement(
        &self,
        user_id: &Id,
        new_agreement: NewArticulationAgreement,
    ) -> Result<ArticulationAgreement> {
        let agreement = new_agreement.into_agreement(user_id.clone());
        self.agreements
            .write()
            .insert(agreement.id.clone(), agreement.clone());
        Ok(agreement)
    }
}

#[async_trait::async_trait]
impl DeadlineStore for MemoryStore {
    async fn get_deadlines_by_user(&self, user_id: &Id) -> Result<Vec<Deadline>> {
        Ok(self
            .deadlines
            .read()
            .values()
            .filter(|deadline| &deadline.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_deadline(&self, user_id: &Id, new_deadline: NewDeadline) -> Result<Deadline> {
        let deadline = new_deadline.into_deadline(user_id.clone());
        self.deadlines
            .write()
            .insert(deadline.id.clone(), deadline.clone());
        Ok(deadline)
    }

    async fn update_deadline(&self, id: &Id, updates: DeadlineUpdate) -> Result<Option<Deadline>> {
        let mut deadlines = self.deadlines.write();
        Ok(deadlines.get_mut(id).map(|deadline| {
            updates.apply(deadline);
            deadline.clone()
        }))
    }
}

#[async_trait::async_trait]
impl ActivityStore for MemoryStore {
    async fn get_activity_by_user(&self, user_id: &Id) -> Result<Vec<ActivityLog>> {
        Ok(self
            .activity
            .read()
            .values()
            .filter(|entry| &entry.user_id == user_id)
            .cloned()
            .sorted_by(|a, b| b.timestamp.cmp(&a.timestamp))
            .collect())
    }

    async fn create_activity(
        &self,
        user_id: &Id,
        new_activity: NewActivityLog,
    ) -> Result<ActivityLog> {
        let activity = new_activity.into_activity(user_id.clone());
        self.activity
            .write()
            .insert(activity.id.clone(), activity.clone());
        Ok(activity)
    }
}

#[async_trait::async_trait]
impl TargetSchoolStore for MemoryStore {
    async fn get_target_schools_by_user(&self, user_id: &Id) -> Result<Vec<TargetSchool>> {
        Ok(self
            .target_schools
            .read()
            .values()
            .filter(|target| &target.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_target_school(
        &self,
        user_id: &Id,
        new_target: NewTargetSchool,
    ) -> Result<TargetSchool> {
        let target = new_target.into_target_school(user_id.clone());
        self.target_schools
            .write()
            .insert(target.id.clone(), target.clone());
        Ok(target)
    }

    async fn delete_target_school(&self, id: &Id) -> Result<bool> {
        Ok(self.target_schools.write().remove(id).is_some())
    }
}
